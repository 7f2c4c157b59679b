use crate::domain::{
    FullName, Interests, Motivation, PhoneNumber, ValidationResult, VolunteerEmail,
};
use std::collections::BTreeSet;

/// Raw field values captured when the volunteer presses submit.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    pub motivation: String,
    #[serde(default)]
    pub interests: BTreeSet<String>,
}

/// A submission whose every field passed validation.
#[derive(Debug)]
pub struct VolunteerApplication {
    pub full_name: FullName,
    pub email: VolunteerEmail,
    pub phone: PhoneNumber,
    pub age: Option<i64>,
    pub motivation: Motivation,
    pub interests: Interests,
}

impl TryFrom<FormSubmission> for VolunteerApplication {
    type Error = ValidationResult;

    fn try_from(form: FormSubmission) -> Result<Self, Self::Error> {
        let full_name = FullName::parse(form.full_name);
        let email = VolunteerEmail::parse(form.email);
        let phone = PhoneNumber::parse(form.phone);
        let motivation = Motivation::parse(form.motivation);
        let interests = Interests::parse(form.interests);

        match (full_name, email, phone, motivation, interests) {
            (Ok(full_name), Ok(email), Ok(phone), Ok(motivation), Ok(interests)) => Ok(Self {
                full_name,
                email,
                phone,
                age: form.age,
                motivation,
                interests,
            }),
            (full_name, email, phone, motivation, interests) => Err([
                full_name.err(),
                email.err(),
                phone.err(),
                motivation.err(),
                interests.err(),
            ]
            .into_iter()
            .flatten()
            .collect()),
        }
    }
}
