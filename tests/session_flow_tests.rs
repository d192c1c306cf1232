//! End-to-end flows through the public API: events in, sessions and effects
//! out, with the JSON store standing in for the host's save task.

use mcp_hub::core::action::{Effect, Event, Key, update};
use mcp_hub::core::filter::filter;
use mcp_hub::core::inventory::{InventoryStore, JsonFileStore, open_session};
use mcp_hub::core::item::{Category, Item};
use mcp_hub::core::layout::compute_layout;
use mcp_hub::core::state::{InteractionState, NotificationLevel, Session};
use mcp_hub::core::view::render;

fn items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item::new(format!("server-{i:03}"), Category::Command).command("npx", &["srv"]))
        .collect()
}

fn sized(items: Vec<Item>, width: u16) -> Session {
    update(Session::new(items), Event::Resize { width, height: 40 }).0
}

fn press(session: Session, key: Key) -> (Session, Option<Effect>) {
    update(session, Event::KeyPress(key))
}

fn type_text(mut session: Session, text: &str) -> Session {
    for c in text.chars() {
        session = press(session, Key::Char(c)).0;
    }
    session
}

fn temp_path(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("mcp-hub-flow-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir.join("inventory.json")
}

#[test]
fn breakpoints_pick_column_counts() {
    assert_eq!(compute_layout(150).column_count, 4);
    assert_eq!(compute_layout(80).column_count, 2);
    assert_eq!(compute_layout(79).column_count, 1);
}

#[test]
fn query_keeps_matches_in_store_order() {
    let store = vec![
        Item::new("github-mcp", Category::Command),
        Item::new("docker-mcp", Category::Command),
        Item::new("context7", Category::Http),
    ];
    let names: Vec<&str> = filter(&store, "mcp").iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["github-mcp", "docker-mcp"]);
}

#[test]
fn toggle_survives_failed_save() {
    let mut session = sized(items(100), 60);
    session.position.selected_index = 50;
    let before = session.items[50].active;

    let (session, effect) = press(session, Key::Char(' '));
    assert_eq!(session.items[50].active, !before);
    let Some(Effect::Persist(request)) = effect else {
        panic!("space should ask for a save");
    };

    let (session, effect) = update(
        session,
        Event::PersistResult {
            id: request.id,
            ok: false,
            error: Some("permission denied".to_string()),
        },
    );
    assert_eq!(effect, None);
    assert_eq!(session.items[50].active, !before);
    assert_eq!(
        session.notification.as_ref().map(|n| n.level),
        Some(NotificationLevel::Error)
    );
}

#[test]
fn narrowing_query_clamps_selection() {
    let mut session = sized(items(100), 60);
    session.position.selected_index = 50;
    let session = press(session, Key::Tab).0;
    let session = type_text(session, "server-007");
    assert_eq!(session.filtered_len(), 1);
    assert_eq!(session.position.selected_index, 0);
    assert_eq!(session.selected_item().map(|i| i.name.as_str()), Some("server-007"));
}

#[test]
fn search_navigate_toggle_then_quit() {
    let session = sized(items(30), 100);
    let session = press(session, Key::Char('/')).0;
    let session = type_text(session, "server-02");
    assert_eq!(session.filtered_len(), 10);

    let session = press(session, Key::Tab).0;
    assert_eq!(session.interaction, InteractionState::QueryNavigating);
    let session = press(press(session, Key::Char('j')).0, Key::Char('j')).0;
    let (session, effect) = press(session, Key::Char(' '));
    assert!(matches!(effect, Some(Effect::Persist(_))));
    assert!(session.items[22].active);

    let frame = render(&session);
    assert!(frame.contains("MCPs: 1/30 Active • Layout: Medium"));
    assert!(frame.contains("Search: server-02 [NAVIGATION MODE]"));

    let session = press(session, Key::Enter).0;
    assert!(render(&session).contains("Found 10 MCPs matching 'server-02' • Esc to clear"));

    let (session, effect) = press(session, Key::Esc);
    assert_eq!(effect, None);
    assert_eq!(session.filtered_len(), 30);
    let (_, effect) = press(session, Key::Esc);
    assert_eq!(effect, Some(Effect::Quit));
}

#[test]
fn grid_navigation_never_leaves_the_list() {
    let mut session = sized(items(10), 150);
    for key in [Key::Up, Key::Left, Key::Down, Key::Down, Key::Down, Key::Right, Key::Right] {
        session = press(session, key).0;
        assert!(session.position.selected_index < 10);
        assert_eq!(session.position.active_column, 0);
    }
    assert_eq!(session.position.selected_index, 9);
}

#[tokio::test]
async fn saved_toggle_is_reloaded() {
    let path = temp_path("reload");
    let store = JsonFileStore::new(&path);
    store.save(items(3)).await.unwrap();

    let session = open_session(&store, true).await;
    let session = update(session, Event::Resize { width: 60, height: 20 }).0;
    let (session, effect) = press(press(session, Key::Down).0, Key::Char(' '));
    let Some(Effect::Persist(request)) = effect else {
        panic!("space should ask for a save");
    };
    store.save(request.items).await.unwrap();
    let (session, _) = update(
        session,
        Event::PersistResult {
            id: request.id,
            ok: true,
            error: None,
        },
    );
    assert!(render(&session).contains("✓ Inventory saved"));

    let reopened = open_session(&JsonFileStore::new(&path), true).await;
    assert!(!reopened.items[0].active);
    assert!(reopened.items[1].active);
    assert_eq!(reopened.items.len(), 3);
}

#[tokio::test]
async fn empty_store_is_seeded_once() {
    let path = temp_path("seed");
    let store = JsonFileStore::new(&path);
    let first = open_session(&store, true).await;
    assert!(!first.items.is_empty());
    assert!(path.exists());

    let second = open_session(&store, false).await;
    assert_eq!(second.items, first.items);
}
