use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Theme;
use crate::store::{ItemStore, StorageBackend};
use tracing::info;

use super::helpers::finish;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Set(Theme),
    Toggle,
}

pub fn run<B: StorageBackend>(store: &ItemStore<B>, action: ThemeAction) -> Result<CmdResult> {
    let current = store.theme()?;
    let mut result = CmdResult::default();

    let theme = match action {
        ThemeAction::Show => {
            result.add_message(CmdMessage::info(format!("Theme: {}", current)));
            current
        }
        ThemeAction::Set(theme) => {
            store.set_theme(theme)?;
            result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
            theme
        }
        ThemeAction::Toggle => {
            let theme = current.toggled();
            store.set_theme(theme)?;
            result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
            theme
        }
    };
    if action != ThemeAction::Show {
        info!(%theme, "changed theme");
    }

    finish(store, result.with_theme(theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn shows_light_by_default() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store, ThemeAction::Show).unwrap();
        assert_eq!(result.theme, Some(Theme::Light));
        assert_eq!(fixture.store.backend().write_count(), 0);
    }

    #[test]
    fn toggle_persists() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store, ThemeAction::Toggle).unwrap();
        assert_eq!(result.theme, Some(Theme::Dark));
        assert_eq!(fixture.store.theme().unwrap(), Theme::Dark);

        run(&fixture.store, ThemeAction::Toggle).unwrap();
        assert_eq!(fixture.store.theme().unwrap(), Theme::Light);
    }

    #[test]
    fn set_is_explicit() {
        let fixture = StoreFixture::new();
        run(&fixture.store, ThemeAction::Set(Theme::Dark)).unwrap();
        run(&fixture.store, ThemeAction::Set(Theme::Dark)).unwrap();
        assert_eq!(fixture.store.theme().unwrap(), Theme::Dark);
    }

    #[test]
    fn theme_does_not_touch_items() {
        let fixture = StoreFixture::new().with_items(2);
        let before = fixture.store.list().unwrap();
        run(&fixture.store, ThemeAction::Toggle).unwrap();
        assert_eq!(fixture.store.list().unwrap(), before);
    }
}
