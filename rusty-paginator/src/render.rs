//! Builds the outbound embed and navigation row for a session.

use twilight_model::channel::message::{
    component::{ActionRow, Button, Component},
    embed::Embed,
};
use twilight_util::builder::embed::{EmbedBuilder, EmbedFooterBuilder};

use crate::config::PaginatorConfig;
use crate::custom_id::{Action, build_custom_id};
use crate::error::PaginatorError;
use crate::session::Session;

/// Footer text for a zero-based `current_page`.
pub fn page_footer(current_page: usize, page_count: usize) -> String {
    format!("Page: {}/{}", current_page + 1, page_count)
}

/// Render the current page and its controls.
pub fn render_session(
    session: &Session,
    config: &PaginatorConfig,
) -> Result<(Embed, Vec<Component>), PaginatorError> {
    let footer = EmbedFooterBuilder::new(page_footer(
        session.current_page(),
        session.page_count(),
    ))
    .build();
    let builder = EmbedBuilder::new()
        .color(config.embed_color)
        .footer(footer);

    let embed = session
        .render_page(builder)
        .map_err(|source| PaginatorError::Render {
            session_id: session.id().to_owned(),
            page: session.current_page(),
            source,
        })?;

    Ok((embed, build_nav_components(session, config)))
}

/// Build the navigation row. Unconfigured buttons are left out; with no
/// buttons at all no row is emitted.
pub fn build_nav_components(session: &Session, config: &PaginatorConfig) -> Vec<Component> {
    let buttons: Vec<Component> = Action::ALL
        .into_iter()
        .filter_map(|action| {
            let options = config.buttons.get(action)?;
            let disabled = match action {
                Action::First | Action::Back => session.is_first_page(),
                Action::Next | Action::Last => session.is_last_page(),
                Action::Stop => false,
            };

            Some(Component::Button(Button {
                id: None,
                custom_id: Some(build_custom_id(
                    &config.custom_id_prefix,
                    session.id(),
                    action,
                )),
                disabled,
                emoji: options.emoji.clone(),
                label: options.label.clone(),
                style: options.style,
                url: None,
                sku_id: None,
            }))
        })
        .collect();

    if buttons.is_empty() {
        return vec![];
    }

    vec![Component::ActionRow(ActionRow {
        id: None,
        components: buttons,
    })]
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;
    use crate::config::ButtonsConfig;
    use crate::session::NewSession;

    fn session(page_count: usize, start_page: usize) -> Session {
        NewSession::new(page_count, |page, embed| {
            Ok(embed.description(format!("page {page}")).build())
        })
        .id("abc")
        .start_page(start_page)
        .into_session(|| unreachable!(), Instant::now())
        .unwrap()
    }

    fn buttons(components: &[Component]) -> Vec<&Button> {
        let Some(Component::ActionRow(row)) = components.first() else {
            panic!("expected an action row");
        };
        row.components
            .iter()
            .map(|component| match component {
                Component::Button(button) => button,
                other => panic!("unexpected component {other:?}"),
            })
            .collect()
    }

    fn disabled_flags(components: &[Component]) -> Vec<bool> {
        buttons(components).iter().map(|b| b.disabled).collect()
    }

    #[test]
    fn footer_is_one_based() {
        assert_eq!(page_footer(0, 3), "Page: 1/3");
        assert_eq!(page_footer(2, 3), "Page: 3/3");
    }

    #[test]
    fn renders_page_with_footer_and_color() {
        let config = PaginatorConfig::default();
        let (embed, _) = render_session(&session(3, 1), &config).unwrap();

        assert_eq!(embed.description.as_deref(), Some("page 1"));
        assert_eq!(embed.color, Some(config.embed_color));
        assert_eq!(embed.footer.map(|f| f.text).as_deref(), Some("Page: 2/3"));
    }

    #[test]
    fn disabled_flags_follow_position() {
        let config = PaginatorConfig::default();

        // first, back, stop, next, last
        let first = build_nav_components(&session(3, 0), &config);
        assert_eq!(disabled_flags(&first), [true, true, false, false, false]);

        let middle = build_nav_components(&session(3, 1), &config);
        assert_eq!(disabled_flags(&middle), [false, false, false, false, false]);

        let last = build_nav_components(&session(3, 2), &config);
        assert_eq!(disabled_flags(&last), [false, false, false, true, true]);

        let single = build_nav_components(&session(1, 0), &config);
        assert_eq!(disabled_flags(&single), [true, true, false, true, true]);
    }

    #[test]
    fn custom_ids_use_prefix_session_and_action() {
        let config = PaginatorConfig::default().with_custom_id_prefix("pg");
        let components = build_nav_components(&session(3, 0), &config);
        let ids: Vec<_> = buttons(&components)
            .iter()
            .filter_map(|b| b.custom_id.clone())
            .collect();

        assert_eq!(
            ids,
            ["pg:abc:first", "pg:abc:back", "pg:abc:stop", "pg:abc:next", "pg:abc:last"]
        );
    }

    #[test]
    fn omitted_buttons_are_absent() {
        let config = PaginatorConfig::default().with_buttons(ButtonsConfig {
            first: None,
            last: None,
            ..ButtonsConfig::default()
        });
        let components = build_nav_components(&session(3, 0), &config);
        let ids: Vec<_> = buttons(&components)
            .iter()
            .filter_map(|b| b.custom_id.clone())
            .collect();

        assert_eq!(ids, ["paginator:abc:back", "paginator:abc:stop", "paginator:abc:next"]);
    }

    #[test]
    fn no_buttons_means_no_row() {
        let config = PaginatorConfig::default().with_buttons(ButtonsConfig::none());
        assert!(build_nav_components(&session(3, 0), &config).is_empty());
    }

    #[test]
    fn renderer_failure_is_reported() {
        let failing = NewSession::new(2, |_, _| Err(anyhow::anyhow!("boom")))
            .id("bad")
            .into_session(|| unreachable!(), Instant::now())
            .unwrap();

        let err = render_session(&failing, &PaginatorConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            PaginatorError::Render { ref session_id, page: 0, .. } if session_id == "bad"
        ));
    }
}
