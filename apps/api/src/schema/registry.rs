use super::{Check, FieldRule, ResourceSchema, Rule};
use crate::models::history::MONTHS;
use crate::models::others::FieldKind;
use crate::models::profile::Platform;
use crate::store::Collection;

use Check::*;

/// Returns the schema registered for a collection.
pub fn schema_for(collection: Collection) -> &'static ResourceSchema {
    match collection {
        Collection::Profile => &PROFILE,
        Collection::Experience => &EXPERIENCE,
        Collection::Education => &EDUCATION,
        Collection::Others => &OTHERS,
    }
}

pub const PROFILE: ResourceSchema = ResourceSchema {
    collection: Collection::Profile,
    fields: &[
        FieldRule {
            path: "firstName",
            optional: false,
            rules: &[Rule {
                check: MinLen(1),
                message: "First name is required",
            }],
        },
        FieldRule {
            path: "lastName",
            optional: false,
            rules: &[Rule {
                check: MinLen(1),
                message: "Last name is required",
            }],
        },
        FieldRule {
            path: "address",
            optional: false,
            rules: &[Rule {
                check: MinLen(5),
                message: "Address should be at least 5 characters",
            }],
        },
        FieldRule {
            path: "countryCode",
            optional: false,
            rules: &[Rule {
                check: MinLen(1),
                message: "Country code is required",
            }],
        },
        FieldRule {
            path: "phone",
            optional: false,
            rules: &[
                Rule {
                    check: MinLen(1),
                    message: "Phone number is required",
                },
                Rule {
                    check: Digits,
                    message: "Phone number must contain only digits",
                },
                Rule {
                    check: MinLen(7),
                    message: "Phone number must be at least 7 digits",
                },
                Rule {
                    check: MaxLen(15),
                    message: "Phone number must be at most 15 digits",
                },
            ],
        },
        FieldRule {
            path: "email",
            optional: false,
            rules: &[Rule {
                check: Email,
                message: "Invalid email address",
            }],
        },
        FieldRule {
            path: "professionalSummary",
            optional: false,
            rules: &[Rule {
                check: MinLen(100),
                message: "Express yourself",
            }],
        },
        FieldRule {
            path: "picture",
            optional: true,
            rules: &[Rule {
                check: Text,
                message: "Picture must be a string",
            }],
        },
        FieldRule {
            path: "socialMedia",
            optional: true,
            rules: &[Rule {
                check: List,
                message: "Social media must be a list",
            }],
        },
        FieldRule {
            path: "socialMedia[].platform",
            optional: false,
            rules: &[Rule {
                check: Text,
                message: "Platform is required",
            }],
        },
        FieldRule {
            path: "socialMedia[].icon",
            optional: false,
            rules: &[Rule {
                check: OneOf(&Platform::KEYS),
                message: "Select a platform",
            }],
        },
        FieldRule {
            path: "socialMedia[].url",
            optional: false,
            rules: &[Rule {
                check: Url,
                message: "Invalid URL",
            }],
        },
        FieldRule {
            path: "socialMedia[].customName",
            optional: true,
            rules: &[Rule {
                check: Text,
                message: "Platform name must be text",
            }],
        },
        FieldRule {
            path: "skills",
            optional: false,
            rules: &[
                Rule {
                    check: MinItems(1),
                    message: "At least one skill is required",
                },
                Rule {
                    check: StringList,
                    message: "Skills must be text",
                },
            ],
        },
    ],
};

pub const EXPERIENCE: ResourceSchema = ResourceSchema {
    collection: Collection::Experience,
    fields: &[
        FieldRule {
            path: "title",
            optional: false,
            rules: &[Rule {
                check: MinLen(2),
                message: "Job Title is required",
            }],
        },
        FieldRule {
            path: "organization",
            optional: false,
            rules: &[Rule {
                check: MinLen(2),
                message: "Employer is required",
            }],
        },
        LOCATION,
        LOCATION_CITY,
        LOCATION_STATE,
        FieldRule {
            path: "description",
            optional: false,
            rules: &[Rule {
                check: MinLen(100),
                message: "Express yourself",
            }],
        },
        START_MONTH,
        START_YEAR,
        END_MONTH,
        END_YEAR,
        CURRENT,
    ],
};

pub const EDUCATION: ResourceSchema = ResourceSchema {
    collection: Collection::Education,
    fields: &[
        FieldRule {
            path: "title",
            optional: false,
            rules: &[Rule {
                check: MinLen(2),
                message: "Degree is required",
            }],
        },
        FieldRule {
            path: "organization",
            optional: false,
            rules: &[Rule {
                check: MinLen(2),
                message: "Institution is required",
            }],
        },
        LOCATION,
        LOCATION_CITY,
        LOCATION_STATE,
        FieldRule {
            path: "description",
            optional: true,
            rules: &[Rule {
                check: Text,
                message: "Description must be text",
            }],
        },
        START_MONTH,
        START_YEAR,
        END_MONTH,
        END_YEAR,
        CURRENT,
    ],
};

// The store itself is schema-less for other sections; only the structure the
// section editor produces is checked.
pub const OTHERS: ResourceSchema = ResourceSchema {
    collection: Collection::Others,
    fields: &[
        FieldRule {
            path: "heading",
            optional: false,
            rules: &[Rule {
                check: Text,
                message: "Heading must be text",
            }],
        },
        FieldRule {
            path: "fields",
            optional: false,
            rules: &[Rule {
                check: List,
                message: "Fields must be a list",
            }],
        },
        FieldRule {
            path: "fields[].id",
            optional: false,
            rules: &[Rule {
                check: MinLen(1),
                message: "Field id is required",
            }],
        },
        FieldRule {
            path: "fields[].type",
            optional: false,
            rules: &[Rule {
                check: OneOf(&FieldKind::KEYS),
                message: "Unknown field type",
            }],
        },
        FieldRule {
            path: "fields[].label",
            optional: true,
            rules: &[Rule {
                check: Text,
                message: "Label must be text",
            }],
        },
        FieldRule {
            path: "fields[].value",
            optional: true,
            rules: &[Rule {
                check: Text,
                message: "Value must be text",
            }],
        },
        FieldRule {
            path: "fields[].options",
            optional: true,
            rules: &[Rule {
                check: StringList,
                message: "Options must be a list of text",
            }],
        },
        FieldRule {
            path: "fields[].showLabel",
            optional: true,
            rules: &[Rule {
                check: Boolean,
                message: "Show label must be true or false",
            }],
        },
    ],
};

const LOCATION: FieldRule = FieldRule {
    path: "location",
    optional: true,
    rules: &[Rule {
        check: Object,
        message: "Location must be an object",
    }],
};

const LOCATION_CITY: FieldRule = FieldRule {
    path: "location.city",
    optional: true,
    rules: &[Rule {
        check: Text,
        message: "City must be text",
    }],
};

const LOCATION_STATE: FieldRule = FieldRule {
    path: "location.state",
    optional: true,
    rules: &[Rule {
        check: Text,
        message: "State must be text",
    }],
};

const START_MONTH: FieldRule = FieldRule {
    path: "startDate.month",
    optional: false,
    rules: &[
        Rule {
            check: MinLen(1),
            message: "Start month is required",
        },
        Rule {
            check: OneOf(&MONTHS),
            message: "Select a valid month",
        },
    ],
};

const START_YEAR: FieldRule = FieldRule {
    path: "startDate.year",
    optional: false,
    rules: &[
        Rule {
            check: MinLen(1),
            message: "Start year is required",
        },
        Rule {
            check: Digits,
            message: "Year must be numeric",
        },
    ],
};

const END_MONTH: FieldRule = FieldRule {
    path: "endDate.month",
    optional: true,
    rules: &[Rule {
        check: Text,
        message: "End month must be text",
    }],
};

const END_YEAR: FieldRule = FieldRule {
    path: "endDate.year",
    optional: true,
    rules: &[Rule {
        check: Text,
        message: "End year must be text",
    }],
};

const CURRENT: FieldRule = FieldRule {
    path: "current",
    optional: true,
    rules: &[Rule {
        check: Boolean,
        message: "Current must be true or false",
    }],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Document;
    use serde_json::{json, Value};

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    fn summary() -> String {
        "Backend engineer with a decade of experience building reliable data services, \
         mentoring teams and shipping products."
            .to_string()
    }

    fn valid_profile() -> Value {
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "address": "12 St James's Square",
            "countryCode": "+44",
            "phone": "2071234567",
            "email": "ada@example.com",
            "professionalSummary": summary(),
            "picture": null,
            "socialMedia": [
                {"platform": "GitHub", "icon": "github", "url": "https://github.com/ada"},
                {"platform": "", "icon": "other", "url": "https://ada.dev", "customName": "Blog"}
            ],
            "skills": ["Mathematics"]
        })
    }

    #[test]
    fn test_every_collection_has_a_schema() {
        for c in Collection::ALL {
            assert_eq!(schema_for(c).collection, c);
            assert!(!schema_for(c).fields.is_empty());
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(PROFILE.validate(&doc(valid_profile())).is_ok());
    }

    #[test]
    fn test_phone_rules() {
        let cases = [
            ("", "Phone number is required"),
            ("555-1234", "Phone number must contain only digits"),
            ("12345", "Phone number must be at least 7 digits"),
            ("1234567890123456", "Phone number must be at most 15 digits"),
        ];
        for (phone, expected) in cases {
            let mut p = valid_profile();
            p["phone"] = json!(phone);
            let errors = PROFILE.validate(&doc(p)).unwrap_err();
            assert_eq!(errors.message_for("phone"), Some(expected), "phone {phone:?}");
        }
    }

    #[test]
    fn test_profile_summary_soft_gate() {
        let mut p = valid_profile();
        p["professionalSummary"] = json!("Short.");
        let errors = PROFILE.validate(&doc(p)).unwrap_err();
        assert_eq!(errors.message_for("professionalSummary"), Some("Express yourself"));
    }

    #[test]
    fn test_profile_needs_a_skill_and_valid_urls() {
        let mut p = valid_profile();
        p["skills"] = json!([]);
        p["socialMedia"][1]["url"] = json!("not a url");
        p["email"] = json!("ada@");
        let errors = PROFILE.validate(&doc(p)).unwrap_err();
        assert_eq!(errors.message_for("skills"), Some("At least one skill is required"));
        assert_eq!(errors.message_for("socialMedia.1.url"), Some("Invalid URL"));
        assert_eq!(errors.message_for("email"), Some("Invalid email address"));
    }

    #[test]
    fn test_minimal_education_item_passes() {
        let item = doc(json!({
            "title": "BSc",
            "organization": "State University",
            "startDate": {"month": "August", "year": "2019"}
        }));
        assert!(EDUCATION.validate(&item).is_ok());
    }

    #[test]
    fn test_education_messages() {
        let item = doc(json!({
            "title": "B",
            "organization": "",
            "startDate": {"month": "Augst", "year": ""}
        }));
        let errors = EDUCATION.validate(&item).unwrap_err();
        assert_eq!(errors.message_for("title"), Some("Degree is required"));
        assert_eq!(errors.message_for("organization"), Some("Institution is required"));
        assert_eq!(errors.message_for("startDate.month"), Some("Select a valid month"));
        assert_eq!(errors.message_for("startDate.year"), Some("Start year is required"));
    }

    #[test]
    fn test_experience_requires_description() {
        let item = doc(json!({
            "title": "Engineer",
            "organization": "Acme",
            "startDate": {"month": "March", "year": "2021"},
            "current": true
        }));
        let errors = EXPERIENCE.validate(&item).unwrap_err();
        assert_eq!(errors.message_for("description"), Some("Express yourself"));
        assert_eq!(errors.errors().len(), 1);
    }

    #[test]
    fn test_others_structure() {
        let section = doc(json!({
            "heading": "",
            "fields": [
                {"id": "1", "type": "radio", "label": "", "value": "", "options": ["Option 1"], "showLabel": true},
                {"id": "2", "type": "slider", "label": "", "value": "", "showLabel": true}
            ]
        }));
        let errors = OTHERS.validate(&section).unwrap_err();
        assert_eq!(errors.message_for("fields.1.type"), Some("Unknown field type"));
        assert_eq!(errors.errors().len(), 1);

        assert!(OTHERS
            .validate(&doc(json!({"heading": "", "fields": []})))
            .is_ok());
    }
}
