//! Record to block mapping.

use super::error::{MapError, MapResult};
use super::record::{FieldOption, FieldRef, FieldSpec, Record};
use crate::rfc::vdir::core::{Block, Parameter, Property, StructuredValue, Value};

/// Builds a block from a record.
///
/// ## Errors
/// Returns `UnsupportedShape` if a field's type does not fit its option.
#[tracing::instrument(skip_all)]
pub fn to_block(record: &dyn Record) -> MapResult<Block> {
    let mut block = Block::default();

    record.visit(&mut |spec: FieldSpec, field: FieldRef<'_>| {
        match spec.option {
            FieldOption::Profile => {
                let FieldRef::Text(profile) = field else {
                    return Err(MapError::unsupported(spec, "text", field.shape()));
                };
                profile.clone_into(&mut block.profile);
                if block.profile.is_empty() {
                    spec.name.clone_into(&mut block.profile);
                }
            }
            FieldOption::Object => match field {
                FieldRef::Records(list) => {
                    for record in (0..list.len()).filter_map(|i| list.record(i)) {
                        block.add_block(child_block(spec, record)?);
                    }
                }
                FieldRef::Record(record) => block.add_block(child_block(spec, record)?),
                FieldRef::Text(_) | FieldRef::TextList(_) => {
                    return Err(MapError::unsupported(spec, "record or record list", field.shape()));
                }
            },
            FieldOption::Value | FieldOption::Param | FieldOption::Multiple => match field {
                FieldRef::Text(text) => {
                    if !text.is_empty() {
                        block.add_property(Property::text(spec.name, text));
                    }
                }
                FieldRef::TextList(list) => {
                    let strings = non_empty(list);
                    if !strings.is_empty() {
                        block.add_property(Property::structured(spec.name, vec![Value(strings)]));
                    }
                }
                FieldRef::Record(record) => {
                    if let Some(prop) = to_property(spec.name, record)? {
                        block.add_property(prop);
                    }
                }
                FieldRef::Records(list) => {
                    for record in (0..list.len()).filter_map(|i| list.record(i)) {
                        if let Some(prop) = to_property(spec.name, record)? {
                            block.add_property(prop);
                        }
                    }
                }
            },
        }
        Ok(())
    })?;

    tracing::trace!(
        profile = %block.profile,
        properties = block.properties.len(),
        blocks = block.blocks.len(),
        "Record mapped to block"
    );
    Ok(block)
}

/// Builds a child block, taking the profile from the object field's name
/// when the child record declares none.
fn child_block(spec: FieldSpec, record: &dyn Record) -> MapResult<Block> {
    let mut child = to_block(record)?;
    if child.profile.is_empty() {
        spec.name.clone_into(&mut child.profile);
    }
    Ok(child)
}

/// Decomposes a record into one property.
///
/// `param` fields become parameters; all other fields become value
/// components in declaration order. Returns `None` when every component and
/// every parameter is empty.
///
/// ## Errors
/// Returns `UnsupportedShape` for nested records, record lists, and
/// `profile` or `object` fields.
pub fn to_property(name: &str, record: &dyn Record) -> MapResult<Option<Property>> {
    let mut prop = Property {
        value: StructuredValue::new(),
        ..Property::new(name)
    };

    record.visit(&mut |spec: FieldSpec, field: FieldRef<'_>| {
        match (spec.option, field) {
            (FieldOption::Param, FieldRef::Text(text)) => {
                if !text.is_empty() {
                    prop.add_param(Parameter::new(spec.name, text));
                }
            }
            (FieldOption::Param, FieldRef::TextList(list)) => {
                let values = non_empty(list);
                if !values.is_empty() {
                    prop.add_param(Parameter::multi(spec.name, values));
                }
            }
            (FieldOption::Param, field) => {
                return Err(MapError::unsupported(spec, "text or text list", field.shape()));
            }
            (FieldOption::Profile | FieldOption::Object, field) => {
                return Err(MapError::unsupported(spec, "value or param field", field.shape()));
            }
            (_, FieldRef::Text(text)) => {
                prop.value.push(if text.is_empty() {
                    Value::new()
                } else {
                    Value::single(text)
                });
            }
            (_, FieldRef::TextList(list)) => prop.value.push(Value(non_empty(list))),
            (_, field) => {
                return Err(MapError::unsupported(spec, "text or text list", field.shape()));
            }
        }
        Ok(())
    })?;

    if prop.value.is_empty() {
        prop.value.push(Value::new());
    }
    if prop.value.is_blank() && prop.params.is_empty() {
        return Ok(None);
    }
    Ok(Some(prop))
}

fn non_empty(list: &[String]) -> Vec<String> {
    list.iter().filter(|s| !s.is_empty()).cloned().collect()
}
