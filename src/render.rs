#![deny(missing_docs)]

//! # OpenAPI Rendering
//!
//! Converts a committed response set into the `responses` object of an
//! OpenAPI operation.

use crate::classify::ContainerKind;
use crate::descriptor::ResponseDescriptor;
use crate::model_ref::ModelReference;
use crate::naming::is_primitive_name;
use utoipa::openapi::schema::{ArrayBuilder, KnownFormat, ObjectBuilder, SchemaFormat, Type};
use utoipa::openapi::{Content, Ref, RefOr, ResponseBuilder, Responses, Schema};

/// Media type used for response bodies.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Renders `responses` keyed by status code.
///
/// When two descriptors share a code, the one inserted last wins.
pub fn to_openapi_responses<'a>(
    responses: impl IntoIterator<Item = &'a ResponseDescriptor>,
) -> Responses {
    let mut rendered = Responses::new();
    for descriptor in responses {
        let mut builder = ResponseBuilder::new().description(descriptor.message());
        if let Some(model) = descriptor.response_model() {
            builder = builder.content(JSON_MEDIA_TYPE, Content::new(Some(model_schema(model))));
        }
        rendered
            .responses
            .insert(descriptor.code().to_string(), RefOr::T(builder.build()));
    }
    rendered
}

/// Builds the schema for a model reference.
pub fn model_schema(model: &ModelReference) -> RefOr<Schema> {
    match model {
        ModelReference::Direct { type_name } => named_schema(type_name),
        ModelReference::Container {
            container,
            item_type,
        } => {
            let array = ArrayBuilder::new()
                .items(named_schema(item_type))
                .unique_items(*container == ContainerKind::Set)
                .build();
            RefOr::T(Schema::Array(array))
        }
    }
}

fn named_schema(name: &str) -> RefOr<Schema> {
    if !is_primitive_name(name) {
        return RefOr::Ref(Ref::from_schema_name(name));
    }

    let (schema_type, format) = match name {
        "string" => (Type::String, None),
        "boolean" => (Type::Boolean, None),
        "int" => (Type::Integer, Some(KnownFormat::Int32)),
        "long" => (Type::Integer, Some(KnownFormat::Int64)),
        "float" => (Type::Number, Some(KnownFormat::Float)),
        "double" => (Type::Number, Some(KnownFormat::Double)),
        "uuid" => (Type::String, Some(KnownFormat::Uuid)),
        "date-time" => (Type::String, Some(KnownFormat::DateTime)),
        "date" => (Type::String, Some(KnownFormat::Date)),
        _ => (Type::Object, None),
    };

    RefOr::T(Schema::Object(
        ObjectBuilder::new()
            .schema_type(schema_type)
            .format(format.map(SchemaFormat::KnownFormat))
            .build(),
    ))
}
