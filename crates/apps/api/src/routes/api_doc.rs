use crate::routes::{gallery, root};
use common_services::api::gallery::interfaces::{ErrorEnvelope, SaveAcknowledgement};
use common_types::{GalleryDocument, ImageRecord};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        root::handlers::health_check,
        gallery::handlers::get_gallery_handler,
        gallery::handlers::replace_gallery_handler,
    ),
    components(
        schemas(GalleryDocument, ImageRecord, SaveAcknowledgement, ErrorEnvelope),
    ),
    tags(
        (name = "Gallery", description = "Whole-document read and replace of the parts gallery. Unauthenticated."),
        (name = "System", description = "Health check"),
    )
)]
pub struct ApiDoc;
