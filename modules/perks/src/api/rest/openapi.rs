use utoipa::OpenApi;

use crate::api::rest::{dto, error, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_perks,
        handlers::filter_perks,
        handlers::get_perk,
        handlers::create_perk,
        handlers::update_perk_title,
        handlers::delete_perk,
    ),
    components(schemas(
        dto::PerkDto,
        dto::PerkEnvelope,
        dto::CategoryDto,
        dto::CreatePerkReq,
        dto::UpdatePerkTitleReq,
        dto::DeleteAck,
        error::ErrorBody,
    )),
    tags((name = "perks", description = "Merchant perks"))
)]
pub struct PerksApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    PerksApiDoc::openapi()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_perk_route() {
        let v = serde_json::to_value(openapi()).unwrap();

        assert!(v.pointer("/paths/~1perks/get").is_some());
        assert!(v.pointer("/paths/~1perks/post").is_some());
        assert!(v.pointer("/paths/~1perks~1filter/get").is_some());
        for method in ["get", "patch", "put", "delete"] {
            assert!(
                v.pointer(&format!("/paths/~1perks~1{{id}}/{method}")).is_some(),
                "missing {method} /perks/{{id}}"
            );
        }
        assert!(v.pointer("/components/schemas/PerkDto").is_some());
        assert!(v.pointer("/components/schemas/ErrorBody").is_some());
    }
}
