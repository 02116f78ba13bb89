// Mail-compose URI assembly and the hand-off to the system mail handler.
// Composition is pure string work; no network call is ever made here.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::process::Command;

/// Characters left verbatim by JavaScript's `encodeURIComponent`.
const MAIL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, MAIL_COMPONENT).to_string()
}

/// Address, subject and body are each encoded independently.
pub fn mailto_uri(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        encode_component(to),
        encode_component(subject),
        encode_component(body)
    )
}

/// Hands the composed URI to the platform opener, which dispatches it to the
/// registered mail client. Delivery is invisible to us from here on.
pub fn hand_off(uri: &str) -> color_eyre::Result<()> {
    let mut command = opener();
    command.arg(uri);

    let status = command.status()?;
    if !status.success() {
        return Err(color_eyre::eyre::eyre!(
            "mail handler exited with {status}"
        ));
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener() -> Command {
    Command::new("open")
}

#[cfg(target_os = "windows")]
fn opener() -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener() -> Command {
    Command::new("xdg-open")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_matches_encode_uri_component() {
        assert_eq!(
            encode_component("[Data Request] A. Lee - ds1, ds2"),
            "%5BData%20Request%5D%20A.%20Lee%20-%20ds1%2C%20ds2"
        );
        // The unreserved marks survive untouched.
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_component("a@x.edu"), "a%40x.edu");
    }

    #[test]
    fn multibyte_text_is_percent_encoded_per_utf8_byte() {
        assert_eq!(encode_component("数据"), "%E6%95%B0%E6%8D%AE");
    }

    #[test]
    fn mailto_uri_encodes_each_part_independently() {
        let uri = mailto_uri("a@x.edu", "Hello there", "Line 1\nLine 2");
        assert_eq!(
            uri,
            "mailto:a%40x.edu?subject=Hello%20there&body=Line%201%0ALine%202"
        );
    }
}
