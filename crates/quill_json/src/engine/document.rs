//! Assembly of object literals and whole documents.

use alloc::string::String;

use super::context::SerializationContext;
use super::dispatch::{Action, dispatch};
use super::introspect::enumerate;
use super::render::render_value;
use super::text::{ObjectFrame, write_quoted};
use crate::engine::EngineConfig;
use crate::info::ObjectInfo;
use crate::ops::Object;
use crate::{Reflect, ReflectRef, SerializeError};

/// Returns the metadata of `object`, or fails if it lacks the serializable marker.
pub(crate) fn serializable(object: &dyn Object) -> Result<ObjectInfo, SerializeError> {
    let info = object.object_info();
    if !info.is_serializable() {
        return Err(SerializeError::NotSerializable {
            type_path: info.type_path(),
        });
    }
    Ok(info)
}

/// Appends the complete document of `root` to `out`.
pub(crate) fn write_document(
    out: &mut String,
    root: &dyn Reflect,
    config: &EngineConfig,
) -> Result<(), SerializeError> {
    let ReflectRef::Object(object) = root.reflect_ref() else {
        return Err(SerializeError::NotSerializable {
            type_path: root.reflect_type_path(),
        });
    };

    log::trace!("serializing `{}`", root.reflect_type_path());

    write_labeled(out, object, config, SerializationContext::new(config.max_depth()))
}

/// Appends `object` as a document of its own: marker check, root label, literal.
///
/// Used for the document root and for the elements of lists and maps. Objects
/// held directly by a field go through [`write_object`] and carry no label.
pub(crate) fn write_labeled(
    out: &mut String,
    object: &dyn Object,
    config: &EngineConfig,
    ctx: SerializationContext,
) -> Result<(), SerializeError> {
    let info = serializable(object)?;

    if config.root_label()
        && let Some(label) = info.label()
    {
        write_quoted(out, &label, config.escape_text())?;
        out.push(' ');
    }

    write_object(out, object, &info, config, ctx)
}

/// Appends the object literal of `object` to `out`.
///
/// `ctx` is the context of the enclosing object, the object itself sits one
/// level deeper.
pub(crate) fn write_object(
    out: &mut String,
    object: &dyn Object,
    info: &ObjectInfo,
    config: &EngineConfig,
    ctx: SerializationContext,
) -> Result<(), SerializeError> {
    let ctx = ctx.enter()?;
    log::trace!("entering `{}` at depth {}", info.type_path(), ctx.depth());

    let fields = enumerate(object, info)?;
    let mut frame = ObjectFrame::open(out, config.escape_text());

    for field in &fields {
        match dispatch(object, field)? {
            Action::Skip => {}
            Action::Convert(text) => {
                write_quoted(frame.entry(&field.name())?, &text, config.escape_text())?;
            }
            Action::RenderNormally(value) => {
                render_value(frame.entry(&field.name())?, value, config, ctx)?;
            }
        }
    }

    frame.close();
    Ok(())
}
