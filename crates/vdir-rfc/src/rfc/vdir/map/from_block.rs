//! Block to record mapping.

use super::error::{MapError, MapResult};
use super::record::{FieldMut, FieldOption, FieldSpec, Record};
use crate::rfc::vdir::core::{Block, Property};

/// Fills a record from a block.
///
/// Fields whose property is absent keep their current value.
///
/// ## Errors
/// Returns `UnsupportedShape` if a field's type does not fit its option.
#[tracing::instrument(skip_all, fields(profile = %block.profile))]
pub fn from_block(record: &mut dyn Record, block: &Block) -> MapResult<()> {
    let props = block.property_map();

    record.visit_mut(&mut |spec: FieldSpec, field: FieldMut<'_>| {
        match spec.option {
            FieldOption::Profile => {
                let FieldMut::Text(profile) = field else {
                    return Err(MapError::unsupported(spec, "text", field.shape()));
                };
                block.profile.clone_into(profile);
            }
            FieldOption::Object => {
                let FieldMut::Records(list) = field else {
                    return Err(MapError::unsupported(spec, "record list", field.shape()));
                };
                for child in block.blocks_of(spec.name) {
                    list.push_with(&mut |record: &mut dyn Record| from_block(record, child))?;
                }
            }
            FieldOption::Value | FieldOption::Param | FieldOption::Multiple => {
                let Some(matches) = props.get(&spec.name.to_ascii_uppercase()) else {
                    return Ok(());
                };
                let Some(first) = matches.first() else {
                    return Ok(());
                };
                match field {
                    FieldMut::Text(text) => first.text_value().clone_into(text),
                    FieldMut::TextList(list) if spec.option == FieldOption::Multiple => {
                        *list = matches
                            .iter()
                            .flat_map(|p| p.value.iter())
                            .flat_map(|v| v.iter().cloned())
                            .collect();
                    }
                    FieldMut::TextList(list) => {
                        *list = first.value.component(0).map(|v| v.0.clone()).unwrap_or_default();
                    }
                    FieldMut::Record(record) => from_property(record, first)?,
                    FieldMut::Records(list) => {
                        for prop in matches {
                            list.push_with(&mut |record: &mut dyn Record| from_property(record, prop))?;
                        }
                    }
                }
            }
        }
        Ok(())
    })?;

    tracing::trace!("Block mapped to record");
    Ok(())
}

/// Fills a record from one property.
///
/// `param` fields read the parameter of the same name; the remaining fields
/// take value components in order. Extra components are ignored and missing
/// ones leave the field unchanged.
///
/// ## Errors
/// Returns `UnsupportedShape` for fields that are not text or text lists.
pub fn from_property(record: &mut dyn Record, prop: &Property) -> MapResult<()> {
    let mut components = prop.value.iter();

    record.visit_mut(&mut |spec: FieldSpec, field: FieldMut<'_>| {
        match (spec.option, field) {
            (FieldOption::Param, FieldMut::Text(text)) => {
                if let Some(value) = prop.param_value(spec.name) {
                    value.clone_into(text);
                }
            }
            (FieldOption::Param, FieldMut::TextList(list)) => {
                if let Some(param) = prop.param(spec.name) {
                    list.clone_from(&param.values);
                }
            }
            (FieldOption::Param, field) => {
                return Err(MapError::unsupported(spec, "text or text list", field.shape()));
            }
            (FieldOption::Profile | FieldOption::Object, field) => {
                return Err(MapError::unsupported(spec, "value or param field", field.shape()));
            }
            (_, FieldMut::Text(text)) => {
                if let Some(component) = components.next() {
                    component.text().clone_into(text);
                }
            }
            (_, FieldMut::TextList(list)) => {
                if let Some(component) = components.next() {
                    list.clone_from(&component.0);
                }
            }
            (_, field) => {
                return Err(MapError::unsupported(spec, "text or text list", field.shape()));
            }
        }
        Ok(())
    })
}
