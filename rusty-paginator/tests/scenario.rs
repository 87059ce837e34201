mod common;

use rusty_paginator::{PaginatorConfig, PaginatorManager, RouteOutcome};
use twilight_model::id::Id;

use common::{Call, RecordingResponder, disabled, footer, numbered_pages};

#[tokio::test]
async fn full_paginator_lifecycle() {
    let manager = PaginatorManager::new(PaginatorConfig::default().with_custom_id_prefix("pg"));
    let owner = Id::new(1);

    let created = RecordingResponder::new("unused");
    let id = manager
        .create(&created, numbered_pages(3).id("abc").owner(owner))
        .await
        .unwrap();
    assert_eq!(id, "abc");

    let Call::Send(message) = created.last() else {
        panic!("expected a new message");
    };
    assert_eq!(footer(&message.embeds), "Page: 1/3");
    assert_eq!(disabled(&message.components), [true, true, false, false, false]);

    let press = RecordingResponder::new("unused");
    let outcome = manager.handle_component("pg:abc:next", owner, &press).await;
    assert_eq!(outcome.unwrap(), RouteOutcome::Navigated { page: 1 });
    let Call::Update(update) = press.last() else {
        panic!("expected an update");
    };
    assert_eq!(footer(update.embeds.as_deref().unwrap()), "Page: 2/3");
    assert_eq!(
        disabled(update.components.as_deref().unwrap()),
        [false, false, false, false, false]
    );

    let press = RecordingResponder::new("unused");
    let outcome = manager.handle_component("pg:abc:last", owner, &press).await;
    assert_eq!(outcome.unwrap(), RouteOutcome::Navigated { page: 2 });
    let Call::Update(update) = press.last() else {
        panic!("expected an update");
    };
    assert_eq!(footer(update.embeds.as_deref().unwrap()), "Page: 3/3");
    assert_eq!(
        disabled(update.components.as_deref().unwrap()),
        [false, false, false, true, true]
    );

    let press = RecordingResponder::new("unused");
    let outcome = manager.handle_component("pg:abc:stop", owner, &press).await;
    assert_eq!(outcome.unwrap(), RouteOutcome::Stopped);
    assert_eq!(
        press.calls(),
        [Call::Update(rusty_paginator::MessageUpdate::clear_components())]
    );
    assert!(manager.registry().lookup("abc").await.is_none());

    for _ in 0..2 {
        let press = RecordingResponder::new("unused");
        let outcome = manager.handle_component("pg:abc:next", owner, &press).await;
        assert_eq!(outcome.unwrap(), RouteOutcome::Expired);
        assert_eq!(
            press.calls(),
            [Call::Update(rusty_paginator::MessageUpdate::clear_components())]
        );
    }
}
