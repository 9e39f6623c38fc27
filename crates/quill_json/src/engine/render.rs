//! Rendering of single values.
//!
//! Objects reached from here go back through the assembler, one level deeper.

use alloc::string::String;

use super::context::SerializationContext;
use super::document::{serializable, write_labeled, write_object};
use super::text::{ListFrame, ObjectFrame, write_quoted, write_raw};
use crate::engine::EngineConfig;
use crate::ops::{List, Map, Scalar};
use crate::{Reflect, ReflectRef, SerializeError};

const NULL: &str = "null";

/// Appends the text of a field value to `out`.
///
/// `ctx` is the context of the enclosing object.
pub(crate) fn render_value(
    out: &mut String,
    value: &dyn Reflect,
    config: &EngineConfig,
    ctx: SerializationContext,
) -> Result<(), SerializeError> {
    match value.reflect_ref() {
        ReflectRef::Null => out.push_str(NULL),
        ReflectRef::Scalar(scalar) => render_scalar(out, scalar, config)?,
        ReflectRef::Text(text) => write_quoted(out, text, config.escape_text())?,
        ReflectRef::List(list) => render_list(out, list, config, ctx)?,
        ReflectRef::Map(map) => render_map(out, map, config, ctx)?,
        ReflectRef::Object(object) => {
            let info = serializable(object)?;
            write_object(out, object, &info, config, ctx)?;
        }
    }
    Ok(())
}

/// Appends the text of a list element or map value to `out`.
///
/// Objects run the whole document pipeline, root label included. A list or
/// map nested directly in another one counts as one level.
fn render_element(
    out: &mut String,
    value: &dyn Reflect,
    config: &EngineConfig,
    ctx: SerializationContext,
) -> Result<(), SerializeError> {
    match value.reflect_ref() {
        ReflectRef::Object(object) => write_labeled(out, object, config, ctx),
        ReflectRef::List(list) => render_list(out, list, config, ctx.enter()?),
        ReflectRef::Map(map) => render_map(out, map, config, ctx.enter()?),
        _ => render_value(out, value, config, ctx),
    }
}

fn render_scalar(
    out: &mut String,
    scalar: &dyn Scalar,
    config: &EngineConfig,
) -> Result<(), SerializeError> {
    if config.escape_text() {
        let value = scalar.as_reflect();
        if value.is::<char>() {
            return write_quoted(out, scalar, true);
        }
        let finite = match (value.downcast_ref::<f64>(), value.downcast_ref::<f32>()) {
            (Some(v), _) => v.is_finite(),
            (_, Some(v)) => v.is_finite(),
            _ => true,
        };
        if !finite {
            out.push_str(NULL);
            return Ok(());
        }
    }
    write_raw(out, scalar)
}

fn render_list(
    out: &mut String,
    list: &dyn List,
    config: &EngineConfig,
    ctx: SerializationContext,
) -> Result<(), SerializeError> {
    let mut frame = ListFrame::open(out);
    for element in list.iter() {
        render_element(frame.item(), element, config, ctx)?;
    }
    frame.close();
    Ok(())
}

fn render_map(
    out: &mut String,
    map: &dyn Map,
    config: &EngineConfig,
    ctx: SerializationContext,
) -> Result<(), SerializeError> {
    let mut frame = ObjectFrame::open(out, config.escape_text());
    for (key, value) in map.iter() {
        render_element(frame.entry(key)?, value, config, ctx)?;
    }
    frame.close();
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::render_value;
    use crate::engine::{EngineConfig, SerializationContext};
    use crate::{Reflect, SerializeError};

    fn render(value: &dyn Reflect) -> Result<String, SerializeError> {
        render_with(EngineConfig::new(), value)
    }

    fn render_with(config: EngineConfig, value: &dyn Reflect) -> Result<String, SerializeError> {
        let mut out = String::new();
        render_value(&mut out, value, &config, SerializationContext::new(config.max_depth()))?;
        Ok(out)
    }

    #[test]
    fn scalars_and_text() {
        assert_eq!(render(&12_i32).unwrap(), "12");
        assert_eq!(render(&true).unwrap(), "true");
        assert_eq!(render(&1.5_f64).unwrap(), "1.5");
        assert_eq!(render(&String::from("joao")).unwrap(), "\"joao\"");
        assert_eq!(render(&"a\"b").unwrap(), "\"a\"b\"");
    }

    #[test]
    fn collections() {
        assert_eq!(render(&vec![1_u8, 2, 3]).unwrap(), "[1, 2, 3]");
        assert_eq!(render(&Vec::<u8>::new()).unwrap(), "[]");
        assert_eq!(render(&vec![Some(1_u8), None]).unwrap(), "[1, null]");
        assert_eq!(
            render(&vec![vec!["a"], vec![]]).unwrap(),
            r#"[["a"], []]"#
        );
    }

    #[test]
    fn maps() {
        let mut map = BTreeMap::new();
        map.insert(2_u8, "two");
        map.insert(1_u8, "one");
        assert_eq!(render(&map).unwrap(), r#"{"1" : "one", "2" : "two"}"#);
        assert_eq!(render(&BTreeMap::<u8, u8>::new()).unwrap(), "{}");
    }

    #[test]
    fn scalars_stay_raw_by_default() {
        assert_eq!(render(&'c').unwrap(), "c");
        assert_eq!(render(&f64::NAN).unwrap(), "NaN");
    }

    #[cfg(feature = "strict")]
    #[test]
    fn strict_scalars() {
        fn strict(value: &dyn Reflect) -> String {
            render_with(EngineConfig::strict(), value).unwrap()
        }

        assert_eq!(strict(&'c'), "\"c\"");
        assert_eq!(strict(&Some('"')), r#""\"""#);
        assert_eq!(strict(&f64::NAN), "null");
        assert_eq!(strict(&f32::INFINITY), "null");
        assert_eq!(strict(&f64::NEG_INFINITY), "null");
        assert_eq!(strict(&1.5_f32), "1.5");
        assert_eq!(strict(&-3_i64), "-3");
        assert_eq!(strict(&vec![1.0_f64, f64::NAN]), "[1, null]");
    }

    #[test]
    fn nested_lists_count_as_levels() {
        let config = EngineConfig::new().with_max_depth(2);
        assert_eq!(render_with(config, &vec![vec![vec![1_u8]]]).unwrap(), "[[[1]]]");
        assert_eq!(
            render_with(config, &vec![vec![vec![vec![1_u8]]]]),
            Err(SerializeError::DepthExceeded {
                depth: 3,
                max_depth: 2,
            })
        );

        let mut map = BTreeMap::new();
        map.insert("a", vec![vec![1_u8]]);
        assert_eq!(render_with(config, &map).unwrap(), r#"{"a" : [[1]]}"#);
        assert!(render_with(config.with_max_depth(1), &map).is_err());
    }
}
