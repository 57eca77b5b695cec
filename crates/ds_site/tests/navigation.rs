use ds_site::content::SiteContent;
use ds_site::contact_form::FormField;
use ds_site::controller::NavigationSource;
use ds_site::map_tab::MapLocation;
use ds_site::template::Block;
use ds_site::{Error, Site, ViewId};
use proptest::prelude::*;

fn site() -> Site {
    Site::new(SiteContent::embedded().unwrap())
}

/// Long enough for any fade and scroll reset to finish.
const SETTLED: f64 = 10.0;

#[test]
fn every_menu_entry_navigates_to_its_view() {
    let mut site = site();
    let menu: Vec<ViewId> = site.content.menu.iter().map(|item| item.view).collect();

    for (idx, view) in menu.into_iter().enumerate() {
        site.navigate(view, NavigationSource::Menu, idx as f64);

        assert_eq!(site.current(), view);
        assert!(site.is_active(view));
    }
}

#[test]
fn mobile_menu_closes_after_navigation() {
    let mut site = site();
    site.navbar.toggle_mobile_menu();
    assert!(site.navbar.is_mobile_menu_open());

    site.navigate(ViewId::Profile, NavigationSource::MobileMenu, 0.0);

    assert!(!site.navbar.is_mobile_menu_open());
    assert_eq!(site.current(), ViewId::Profile);
}

#[test]
fn map_tabs_never_touch_the_current_view() {
    let mut site = site();
    site.navigate(ViewId::About, NavigationSource::Menu, 0.0);

    for location in [MapLocation::Secondary, MapLocation::Primary] {
        site.map_tabs.select(location);

        assert_eq!(site.map_tabs.selected(), location);
        assert_eq!(site.current(), ViewId::About);
        assert_eq!(site.navigation_count(), 1);
    }
}

#[test]
fn contact_scenario_shows_only_the_contact_form() {
    let mut site = site();

    site.navigate(ViewId::Contact, NavigationSource::Content, 0.0);
    assert_eq!(site.current(), ViewId::Contact);

    let visible = site.visible(SETTLED);
    assert_eq!(visible.view, ViewId::Contact);
    assert_eq!(visible.opacity, 1.0);

    let blocks = site.blocks(visible.view);
    let forms: Vec<&Block> = blocks
        .iter()
        .filter(|b| matches!(b, Block::ContactForm(_)))
        .collect();
    assert_eq!(forms.len(), 1);

    let keys: Vec<&str> = FormField::ALL.iter().map(|f| f.key()).collect();
    assert_eq!(keys, vec!["name", "email", "message"]);

    // Nothing from the other views
    assert!(!blocks.iter().any(|b| matches!(
        b,
        Block::Hero { .. }
            | Block::PracticeGrid { .. }
            | Block::Teaser { .. }
            | Block::Portrait { .. }
            | Block::Presence(_)
    )));
}

#[test]
fn input_typed_during_the_exit_fade_is_discarded() {
    let mut site = site();
    site.navigate(ViewId::Contact, NavigationSource::Menu, 0.0);
    assert_eq!(site.visible(SETTLED).view, ViewId::Contact);

    site.navigate(ViewId::Home, NavigationSource::Menu, 5.0);
    // Contact is still fading out
    assert_eq!(site.visible(5.3).view, ViewId::Contact);
    site.contact_form
        .field_mut(FormField::Name)
        .push_str("typed while fading");

    site.navigate(ViewId::Contact, NavigationSource::Footer, 10.0);

    assert!(site.contact_form.is_empty());
}

#[test]
fn unknown_view_id_is_rejected_before_navigation() {
    let mut site = site();

    match "nonexistent-id".parse::<ViewId>() {
        Ok(view) => {
            site.navigate(view, NavigationSource::Content, 0.0);
            panic!("unexpected view {view}");
        }
        Err(Error::UnknownView(id)) => assert_eq!(id, "nonexistent-id"),
        Err(e) => panic!("unexpected error {e}"),
    }

    assert_eq!(site.current(), ViewId::Home);
    assert_eq!(site.visible(0.0).view, ViewId::Home);
}

#[test]
fn rapid_navigation_lands_on_the_last_target() {
    let mut site = site();

    site.navigate(ViewId::About, NavigationSource::Menu, 1.0);
    site.navigate(ViewId::Profile, NavigationSource::Menu, 1.0);

    assert_eq!(site.current(), ViewId::Profile);

    // About never becomes visible
    let mut now = 1.0;
    while now < 1.0 + SETTLED {
        let visible = site.visible(now);
        assert_ne!(visible.view, ViewId::About, "at {now}");
        now += 0.05;
    }

    assert_eq!(site.visible(now).view, ViewId::Profile);
    assert!(!site.is_animating(now));
}

fn view_strategy() -> impl Strategy<Value = ViewId> {
    prop::sample::select(ViewId::ALL.to_vec())
}

proptest! {
    #[test]
    fn navigate_then_read_yields_target(view in view_strategy()) {
        let mut site = site();

        site.navigate(view, NavigationSource::Menu, 0.0);

        prop_assert_eq!(site.current(), view);
    }

    #[test]
    fn any_sequence_settles_on_the_last_target(
        steps in prop::collection::vec((view_strategy(), 0.0f64..1.5), 1..20)
    ) {
        let mut site = site();
        let mut now = 0.0;

        for (view, delay) in &steps {
            now += delay;
            site.navigate(*view, NavigationSource::Menu, now);

            let visible = site.visible(now);
            prop_assert!((0.0..=1.0).contains(&visible.opacity));
        }

        let last = steps.last().map(|(view, _)| *view).unwrap();
        prop_assert_eq!(site.current(), last);

        let visible = site.visible(now + SETTLED);
        prop_assert_eq!(visible.view, last);
        prop_assert_eq!(visible.opacity, 1.0);
        prop_assert!(!site.is_animating(now + SETTLED));
    }
}
