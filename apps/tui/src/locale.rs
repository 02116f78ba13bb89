// Localized UI strings and the key-fallback chains for site configuration.
// Each display field is an ordered list of candidate keys, evaluated
// first-to-last, first non-empty value wins, with a final literal default.

use crate::domain::Lang;

/// Ordered candidate keys for one site-configuration display field.
#[derive(Debug, Clone, Copy)]
pub struct FieldChain {
    pub keys: &'static [&'static str],
    pub fallback: &'static str,
}

/// Fallback chains for every display field the pages read.
#[derive(Debug, Clone, Copy)]
pub struct SiteFields {
    pub title: FieldChain,
    pub owner: FieldChain,
    pub affiliation: FieldChain,
    pub contact_person: FieldChain,
    pub contact_title: FieldChain,
    pub contact_affiliation: FieldChain,
    pub contact_email: FieldChain,
}

/// Fixed user-facing strings for one language.
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    pub subject_tag: &'static str,
    pub unnamed: &'static str,
    pub field_sep: &'static str,
    pub label_name: &'static str,
    pub label_org: &'static str,
    pub label_email: &'static str,
    pub label_datasets: &'static str,
    pub label_purpose: &'static str,
    pub attestation: &'static str,
    pub msg_select_dataset: &'static str,
    pub msg_confirm_terms: &'static str,
    pub msg_init_failed: &'static str,
}

const EN_FIELDS: SiteFields = SiteFields {
    title: FieldChain {
        keys: &["site_title_en", "site_title"],
        fallback: "XX Laboratory Databases",
    },
    owner: FieldChain {
        keys: &["owner_en", "owner"],
        fallback: "XX Laboratory",
    },
    affiliation: FieldChain {
        keys: &["affiliation_en", "affiliation"],
        fallback: "",
    },
    contact_person: FieldChain {
        keys: &["contact_person_en", "contact_person"],
        fallback: "Data administrator",
    },
    contact_title: FieldChain {
        keys: &["contact_title_en", "contact_title"],
        fallback: "",
    },
    contact_affiliation: FieldChain {
        keys: &[
            "contact_affiliation_en",
            "contact_affiliation",
            "affiliation_en",
            "affiliation",
        ],
        fallback: "",
    },
    contact_email: FieldChain {
        keys: &["contact_email"],
        fallback: "data-admin@example.edu",
    },
};

const ZH_FIELDS: SiteFields = SiteFields {
    title: FieldChain {
        keys: &["site_title_zh", "site_title"],
        fallback: "实验室数据库",
    },
    owner: FieldChain {
        keys: &["owner_zh", "owner"],
        fallback: "实验室",
    },
    affiliation: FieldChain {
        keys: &["affiliation_zh", "affiliation"],
        fallback: "",
    },
    contact_person: FieldChain {
        keys: &["contact_person_zh", "contact_person_en"],
        fallback: "数据管理员",
    },
    contact_title: FieldChain {
        keys: &["contact_title_zh", "contact_title_en"],
        fallback: "",
    },
    contact_affiliation: FieldChain {
        keys: &[
            "contact_affiliation_zh",
            "contact_affiliation_en",
            "affiliation_zh",
            "affiliation",
        ],
        fallback: "",
    },
    contact_email: FieldChain {
        keys: &["contact_email"],
        fallback: "data-admin@example.edu",
    },
};

const EN_STRINGS: Strings = Strings {
    subject_tag: "[Data Request]",
    unnamed: "Unnamed",
    field_sep: ": ",
    label_name: "Name",
    label_org: "Affiliation / Department",
    label_email: "Email",
    label_datasets: "Requested datasets",
    label_purpose: "Purpose of use:",
    attestation: "I confirm the data will only be used for research, will not be \
                  redistributed, and all outputs will acknowledge the source.",
    msg_select_dataset: "Please select at least one dataset.",
    msg_confirm_terms: "Please confirm that you agree to the data use terms.",
    msg_init_failed: "Failed to load the catalog. Please try again later.",
};

const ZH_STRINGS: Strings = Strings {
    subject_tag: "[数据申请]",
    unnamed: "未署名",
    field_sep: "：",
    label_name: "姓名",
    label_org: "单位 / 院系",
    label_email: "邮箱",
    label_datasets: "申请数据集",
    label_purpose: "用途说明：",
    attestation: "我承诺仅用于科研目的，不再分发数据，并在成果中致谢与引用来源。",
    msg_select_dataset: "请至少选择一个数据集。",
    msg_confirm_terms: "请勾选同意数据使用条款。",
    msg_init_failed: "目录加载失败，请稍后重试。",
};

pub const fn strings(lang: Lang) -> &'static Strings {
    match lang {
        Lang::En => &EN_STRINGS,
        Lang::Zh => &ZH_STRINGS,
    }
}

pub const fn site_fields(lang: Lang) -> &'static SiteFields {
    match lang {
        Lang::En => &EN_FIELDS,
        Lang::Zh => &ZH_FIELDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_keys_come_before_generic_ones() {
        for fields in [site_fields(Lang::En), site_fields(Lang::Zh)] {
            assert!(fields.title.keys.len() >= 2);
            assert!(fields.owner.keys.len() >= 2);
            assert!(fields.contact_affiliation.keys.len() >= 2);
        }
    }

    #[test]
    fn every_language_has_a_contact_fallback() {
        assert!(!site_fields(Lang::En).contact_email.fallback.is_empty());
        assert!(!site_fields(Lang::Zh).contact_email.fallback.is_empty());
    }
}
