//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use packwise_app::{
    context::AppContext,
    domain::{packaging::MockPackagingService, packs::MockPacksService},
};

use crate::{errors, state::State};

pub(crate) fn strict_packs_mock() -> MockPacksService {
    let mut packs = MockPacksService::new();

    packs.expect_list_pack_sizes().never();
    packs.expect_list_packs().never();
    packs.expect_sync_packs().never();

    packs
}

pub(crate) fn strict_packaging_mock() -> MockPackagingService {
    let mut packaging = MockPackagingService::new();

    packaging.expect_pack_items().never();

    packaging
}

pub(crate) fn state_with(packs: MockPacksService, packaging: MockPackagingService) -> Arc<State> {
    State::from_app_context(AppContext {
        packs: Arc::new(packs),
        packaging: Arc::new(packaging),
    })
}

pub(crate) fn packs_service(packs: MockPacksService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(packs, strict_packaging_mock())))
            .push(route),
    )
    .catcher(errors::catcher())
}

pub(crate) fn packaging_service(packaging: MockPackagingService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(strict_packs_mock(), packaging)))
            .push(route),
    )
    .catcher(errors::catcher())
}
