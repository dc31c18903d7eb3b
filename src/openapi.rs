//! OpenAPI description of the resource routes.
//!
//! The handlers are generic over the service, so the path items are built
//! here from a verb table instead of per-handler attributes.

use utoipa::{
    openapi::{
        content::Content,
        path::{OperationBuilder, ParameterBuilder, ParameterIn, PathItem, PathItemType, PathsBuilder},
        request_body::RequestBodyBuilder,
        response::ResponseBuilder,
        schema::{ArrayBuilder, KnownFormat, ObjectBuilder, Ref, Schema, SchemaFormat, SchemaType},
        RefOr, Required,
    },
    OpenApi,
};

use crate::dto::{OrderDto, OrderItemDto, ProductDto};

const JSON: &str = "application/json";

#[derive(OpenApi)]
#[openapi(
    info(description = "Order management API: produtos, pedidos and itens do pedido."),
    components(schemas(ProductDto, OrderDto, OrderItemDto)),
    tags(
        (name = "produtos", description = "Product management"),
        (name = "pedidos", description = "Order management"),
        (name = "itens", description = "Order line item management"),
    )
)]
struct ApiDoc;

struct Resource {
    tag: &'static str,
    label: &'static str,
    schema: &'static str,
}

const RESOURCES: [Resource; 3] = [
    Resource { tag: "produtos", label: "product", schema: "ProductDto" },
    Resource { tag: "pedidos", label: "order", schema: "OrderDto" },
    Resource { tag: "itens", label: "order item", schema: "OrderItemDto" },
];

#[derive(Clone, Copy)]
enum Body {
    None,
    One,
    Many,
}

struct Verb {
    kind: PathItemType,
    item: bool,
    name: &'static str,
    summary: &'static str,
    request: bool,
    body: Body,
    responses: &'static [(&'static str, &'static str)],
}

// status codes each operation declares
const VERBS: [Verb; 5] = [
    Verb {
        kind: PathItemType::Post,
        item: false,
        name: "create",
        summary: "Create a {}",
        request: true,
        body: Body::One,
        responses: &[
            ("400", "Invalid parameters"),
            ("422", "Unprocessable request body"),
            ("500", "Could not create"),
        ],
    },
    Verb {
        kind: PathItemType::Get,
        item: true,
        name: "read",
        summary: "Fetch a {} by id",
        request: false,
        body: Body::One,
        responses: &[("404", "Not found"), ("500", "Could not fetch")],
    },
    Verb {
        kind: PathItemType::Get,
        item: false,
        name: "read_all",
        summary: "List every {}",
        request: false,
        body: Body::Many,
        responses: &[("500", "Could not fetch")],
    },
    Verb {
        kind: PathItemType::Put,
        item: true,
        name: "update",
        summary: "Update a {} by id",
        request: true,
        body: Body::One,
        responses: &[
            ("400", "Invalid parameters"),
            ("404", "Not found"),
            ("500", "Could not update"),
        ],
    },
    Verb {
        kind: PathItemType::Delete,
        item: true,
        name: "delete",
        summary: "Delete a {} by id",
        request: false,
        body: Body::None,
        responses: &[("404", "Not found"), ("500", "Could not delete")],
    },
];

fn schema_ref(name: &str) -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name(name))
}

fn id_parameter() -> utoipa::openapi::path::Parameter {
    let int64 = ObjectBuilder::new()
        .schema_type(SchemaType::Integer)
        .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int64)))
        .build();

    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some("Server-generated identifier"))
        .schema(Some(RefOr::T(Schema::Object(int64))))
        .build()
}

fn operation(resource: &Resource, verb: &Verb) -> utoipa::openapi::path::Operation {
    let mut op = OperationBuilder::new()
        .tag(resource.tag)
        .operation_id(Some(format!("{}_{}", resource.tag, verb.name)))
        .summary(Some(verb.summary.replace("{}", resource.label)));

    if verb.item {
        op = op.parameter(id_parameter());
    }

    if verb.request {
        let body = RequestBodyBuilder::new()
            .content(JSON, Content::new(schema_ref(resource.schema)))
            .required(Some(Required::True))
            .build();
        op = op.request_body(Some(body));
    }

    let ok = ResponseBuilder::new().description("Success");
    let ok = match verb.body {
        Body::None => ok,
        Body::One => ok.content(JSON, Content::new(schema_ref(resource.schema))),
        Body::Many => {
            let list = ArrayBuilder::new().items(schema_ref(resource.schema)).build();
            ok.content(JSON, Content::new(RefOr::T(Schema::Array(list))))
        }
    };
    op = op.response("200", RefOr::T(ok.build()));

    for (code, description) in verb.responses {
        let res = ResponseBuilder::new().description(*description).build();
        op = op.response(*code, RefOr::T(res));
    }

    op.build()
}

/// The full document served at `/api-docs/openapi.json`.
pub fn document() -> utoipa::openapi::OpenApi {
    let mut paths = PathsBuilder::new();

    for resource in &RESOURCES {
        let base = format!("/api/{}", resource.tag);

        let mut collection: Option<PathItem> = None;
        let mut item: Option<PathItem> = None;

        for verb in &VERBS {
            let slot = if verb.item { &mut item } else { &mut collection };
            let op = operation(resource, verb);
            match slot {
                Some(path_item) => {
                    path_item.operations.insert(verb.kind.clone(), op);
                }
                None => *slot = Some(PathItem::new(verb.kind.clone(), op)),
            }
        }

        if let Some(path_item) = collection {
            paths = paths.path(base.clone(), path_item);
        }
        if let Some(path_item) = item {
            paths = paths.path(format!("{base}/{{id}}"), path_item);
        }
    }

    let mut doc = ApiDoc::openapi();
    doc.paths = paths.build();
    doc
}
