use crate::helpers::spawn_form;

#[test]
fn phone_input_keeps_only_digits() {
    let mut form = spawn_form();

    form.type_phone("+91 98765-4");

    assert_eq!(form.document().fields.phone, "91987654");
}

#[test]
fn phone_input_is_truncated_to_ten_digits() {
    let mut form = spawn_form();

    form.type_phone("919876543210");

    assert_eq!(form.document().fields.phone, "9198765432");
}

#[test]
fn age_below_sixteen_marks_the_field_invalid() {
    let mut form = spawn_form();

    form.type_age("15");

    assert_eq!(
        form.document().age_validity.as_deref(),
        Some("Minimum age requirement is 16 years")
    );
}

#[test]
fn age_above_ninety_nine_marks_the_field_invalid() {
    let mut form = spawn_form();

    form.type_age("100");

    assert_eq!(
        form.document().age_validity.as_deref(),
        Some("Please enter a valid age")
    );
}

#[test]
fn fixing_the_age_clears_the_validity_message() {
    let mut form = spawn_form();
    form.type_age("12");

    form.type_age("42");

    assert_eq!(form.document().age_validity, None);
}

#[test]
fn clearing_the_age_field_is_valid() {
    let mut form = spawn_form();
    form.type_age("200");

    form.type_age("");

    assert_eq!(form.document().age_validity, None);
}

#[test]
fn typed_age_is_stored_in_the_field() {
    let mut form = spawn_form();

    form.type_age(" 42");
    assert_eq!(form.document().fields.age, Some(42));

    form.type_age("");
    assert_eq!(form.document().fields.age, None);
}
