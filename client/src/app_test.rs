#![cfg(not(feature = "browser"))]

use store::contact::STATUS_NEW;

use super::*;

fn native_app() -> App {
    App {
        posts: PostStore::new(LocalStorage, BrowserEnvironment),
        contacts: ContactStore::new(LocalStorage, BrowserEnvironment),
        theme: Rc::new(RefCell::new(ThemeManager::new(LocalStorage, Theme::Light))),
    }
}

#[test]
fn submit_contact_captures_a_new_submission() {
    let mut app = native_app();
    let submission = submit_contact(
        &mut app,
        ContactDraft {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            ..ContactDraft::default()
        },
    );
    assert_eq!(submission.status, STATUS_NEW);
    assert_eq!(app.contacts.len(), 1);
    assert_eq!(app.contacts.all()[0].name, "Ada");
}

#[test]
fn toggle_theme_flips_the_shared_manager() {
    let app = native_app();
    assert_eq!(toggle_theme(&app), Theme::Dark);
    assert_eq!(app.theme.borrow().current(), Theme::Dark);
    assert_eq!(toggle_theme(&app), Theme::Light);
}
