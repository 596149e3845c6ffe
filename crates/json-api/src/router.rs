//! App Router

use salvo::Router;

use crate::{packaging, packs};

pub(crate) fn app_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("package").post(packaging::create::handler))
        .push(
            Router::with_path("packs")
                .get(packs::index::handler)
                .post(packs::sync::handler),
        )
}
