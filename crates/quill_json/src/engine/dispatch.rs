//! Per-field rule resolution.

use alloc::string::{String, ToString};

use super::introspect::FieldDescriptor;
use crate::{Reflect, ReflectRef, SerializeError};

/// What the assembler does with one field.
#[derive(Debug)]
pub(crate) enum Action<'a> {
    /// The field is null and is left out.
    Skip,
    /// A converter produced the field's text.
    Convert(String),
    /// The value goes through the renderer.
    RenderNormally(&'a dyn Reflect),
}

/// Runs the rules bound to `field` against the whole `object`.
///
/// The validator always runs before anything is rendered, even when a
/// converter is bound too. Null fields are skipped before either rule.
pub(crate) fn dispatch<'a>(
    object: &dyn Reflect,
    field: &FieldDescriptor<'a>,
) -> Result<Action<'a>, SerializeError> {
    let name = field.name();

    if field.value.reflect_ref().is_null() {
        log::debug!("skipping null field `{name}` of `{}`", object.reflect_type_path());
        return Ok(Action::Skip);
    }

    if let Some(validator) = field.info.validator() {
        match validator.validate(object) {
            Ok(true) => {}
            Ok(false) => {
                log::debug!("validator `{}` rejected field `{name}`", validator.rule());
                return Err(SerializeError::Validation {
                    field: name,
                    value: describe(field.value),
                });
            }
            Err(source) => {
                log::debug!("validator `{}` of field `{name}` failed: {source}", validator.rule());
                return Err(SerializeError::ValidatorFailed { field: name, source });
            }
        }
    }

    if let Some(converter) = field.info.converter() {
        return match converter.convert(object) {
            Ok(text) => Ok(Action::Convert(text)),
            Err(source) => {
                log::debug!("converter `{}` of field `{name}` failed: {source}", converter.rule());
                Err(SerializeError::Conversion { field: name, source })
            }
        };
    }

    Ok(Action::RenderNormally(field.value))
}

/// The text of a rejected value, as reported in [`SerializeError::Validation`].
fn describe(value: &dyn Reflect) -> String {
    match value.reflect_ref() {
        ReflectRef::Null => String::from("null"),
        ReflectRef::Scalar(v) => v.to_string(),
        ReflectRef::Text(v) => v.to_string(),
        _ => String::from(value.reflect_type_path()),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use super::{Action, describe, dispatch};
    use crate::derive::Reflect;
    use crate::engine::introspect::enumerate;
    use crate::ops::Object;
    use crate::rules::{Converter, RuleError, Validator};
    use crate::SerializeError;

    struct Adult;

    impl Validator<Member> for Adult {
        fn create() -> Result<Self, RuleError> {
            Ok(Adult)
        }

        fn validate(&self, member: &Member) -> bool {
            member.age >= 18
        }
    }

    struct Shout;

    impl Converter<Member> for Shout {
        fn create() -> Result<Self, RuleError> {
            Ok(Shout)
        }

        fn convert(&self, member: &Member) -> Result<String, RuleError> {
            Ok(member.name.to_uppercase())
        }
    }

    #[derive(Reflect)]
    #[reflect(Serializable)]
    struct Member {
        #[reflect(validator = Adult, converter = Shout)]
        name: String,
        age: u8,
        nickname: Option<String>,
    }

    fn actions(member: &Member) -> Result<usize, SerializeError> {
        let info = member.object_info();
        let mut converted = 0;
        for field in enumerate(member, &info)? {
            if let Action::Convert(text) = dispatch(member, &field)? {
                assert_eq!(text, member.name.to_uppercase());
                converted += 1;
            }
        }
        Ok(converted)
    }

    #[test]
    fn validator_then_converter() {
        let member = Member {
            name: String::from("ada"),
            age: 36,
            nickname: None,
        };
        assert_eq!(actions(&member), Ok(1));
    }

    #[test]
    fn rejected_before_conversion() {
        let member = Member {
            name: String::from("tim"),
            age: 12,
            nickname: Some(String::from("timmy")),
        };
        assert_eq!(
            actions(&member),
            Err(SerializeError::Validation {
                field: "name",
                value: String::from("tim"),
            })
        );
    }

    #[test]
    fn null_is_skipped() {
        let member = Member {
            name: String::from("ada"),
            age: 36,
            nickname: None,
        };
        let info = member.object_info();
        let fields = enumerate(&member, &info).unwrap();
        assert!(matches!(dispatch(&member, &fields[2]), Ok(Action::Skip)));
        assert!(matches!(dispatch(&member, &fields[1]), Ok(Action::RenderNormally(_))));
    }

    #[test]
    fn describe_values() {
        assert_eq!(describe(&12_u8), "12");
        assert_eq!(describe(&String::from("x")), "x");
        assert_eq!(describe(&None::<u8>), "null");
        assert!(describe(&vec![1_u8]).contains("Vec<u8>"));
    }
}
