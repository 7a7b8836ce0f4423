#[cfg(test)]
mod tests {
    use crate::core::{
        GalleryTile, Locale, MenuState, NavbarVisibility, NewsletterForm,
        OverlayContent, OverlayManager, OverlayPhase, RevealAction, RevealKind,
        RevealTracker, ScrollReactor, SiteContent, SubmissionPhase,
    };

    #[test]
    fn test_newsletter_end_to_end() {
        let mut form = NewsletterForm::new();
        assert_eq!(form.form_display(), "grid");
        assert_eq!(form.success_display(), "none");

        let generation = form.submit("user@example.com", Locale::En).unwrap();
        assert!(form.is_busy());
        assert_eq!(form.pending_label(), Some("Subscribing..."));

        // After the simulated delay
        assert!(form.complete(generation));
        assert_eq!(form.phase(), SubmissionPhase::Succeeded);
        assert_eq!(form.form_display(), "none");
        assert_eq!(form.success_display(), "block");

        // After the success message expires
        assert!(form.reset(generation));
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert!(!form.is_busy());
        assert_eq!(form.pending_label(), None);
        assert_eq!(form.form_display(), "grid");
        assert_eq!(form.success_display(), "none");
    }

    #[test]
    fn test_newsletter_resubmission_cancels_old_timers() {
        let mut form = NewsletterForm::new();
        let first = form.submit("user@example.com", Locale::En).unwrap();
        form.complete(first);
        form.cancel();

        let second = form.submit("other@example.com", Locale::En).unwrap();
        // The first submission's reset timer fires while the second is pending
        assert!(!form.reset(first));
        assert_eq!(form.phase(), SubmissionPhase::Submitting);
        assert!(form.complete(second));
    }

    #[test]
    fn test_gallery_click_then_escape() {
        let tile = SiteContent::embedded()
            .gallery
            .iter()
            .find(|tile| !tile.video)
            .cloned()
            .unwrap();
        let mut overlays = OverlayManager::new();

        let handle = overlays.open(tile.overlay_content(Locale::En));
        overlays.mark_shown(handle).unwrap();
        assert_eq!(overlays.attached_count(), 1);
        match overlays.get(handle).unwrap().content() {
            OverlayContent::Info { title, description } => {
                assert_eq!(title, &tile.title.en);
                assert_eq!(description, &tile.description.en);
            }
            other => panic!("expected info overlay, got {other:?}"),
        }

        // Escape, pressed twice before the fade-out finishes
        assert_eq!(overlays.close_topmost(), Some(handle));
        assert_eq!(overlays.close_topmost(), None);
        assert_eq!(overlays.get(handle).unwrap().phase(), OverlayPhase::Closing);

        overlays.dispose(handle).unwrap();
        assert_eq!(overlays.attached_count(), 0);
    }

    #[test]
    fn test_video_tile_locks_page_until_closed() {
        let tile: &GalleryTile = SiteContent::embedded()
            .gallery
            .iter()
            .find(|tile| tile.video)
            .unwrap();
        let mut overlays = OverlayManager::new();
        let mut reactor = ScrollReactor::new(0.0);

        let handle = overlays.open(tile.overlay_content(Locale::Ar));
        assert!(overlays.locks_page());

        // Scrolling while the story is open never hides the navbar
        let update = reactor.on_scroll(900.0, overlays.locks_page());
        assert_eq!(update.visibility, NavbarVisibility::Shown);

        overlays.close(handle).unwrap();
        assert!(!overlays.locks_page());
        let update = reactor.on_scroll(900.0, overlays.locks_page());
        assert_eq!(update.visibility, NavbarVisibility::Hidden);
    }

    #[test]
    fn test_open_and_immediately_close_leaves_nothing() {
        let mut overlays = OverlayManager::new();
        for content in [
            OverlayContent::info("a", "b"),
            OverlayContent::story(Locale::En),
        ] {
            let handle = overlays.open(content);
            overlays.close(handle).unwrap();
            let _ = overlays.mark_shown(handle);
            overlays.dispose(handle).unwrap();
        }
        assert!(overlays.is_empty());
    }

    #[test]
    fn test_navbar_hides_and_returns() {
        let mut reactor = ScrollReactor::new(0.0);
        assert_eq!(
            reactor.on_scroll(450.0, false).visibility,
            NavbarVisibility::Hidden
        );
        assert_eq!(
            reactor.on_scroll(300.0, false).visibility,
            NavbarVisibility::Shown
        );
    }

    #[test]
    fn test_menu_double_toggle_is_identity() {
        let mut menu = MenuState::default();
        let before = menu.bar_styles();
        menu.toggle();
        menu.toggle();
        assert_eq!(menu, MenuState::Collapsed);
        assert_eq!(menu.bar_styles(), before);
    }

    #[test]
    fn test_gallery_reveal_staggers_every_tile_once() {
        let tiles = SiteContent::embedded().gallery.len();
        let mut tracker = RevealTracker::default();

        let RevealAction::Reveal { unobserve } = tracker.on_intersection(true) else {
            panic!("first intersection must reveal");
        };
        assert!(unobserve);

        let delays = RevealKind::GalleryGrid.schedule(tiles);
        assert_eq!(delays.len(), tiles);
        assert_eq!(delays.last().copied(), Some((tiles as u32 - 1) * 100));
    }
}
