use super::*;
use crate::net::types::User;

fn design(id: &str) -> Design {
    Design { design_id: DesignId::new(id), name: format!("Design {id}"), preview: format!("https://cdn/{id}.png") }
}

fn loaded(ids: &[&str]) -> DesignsState {
    let mut state = DesignsState::default();
    let ticket = state.begin_load();
    state.finish_load(ticket, Ok(ids.iter().map(|id| design(id)).collect()));
    state
}

fn ids(state: &DesignsState) -> Vec<&str> {
    state.items.iter().map(|d| d.design_id.as_str()).collect()
}

fn signed_in() -> AuthState {
    AuthState::signed_in(Some(User { name: "Ada".to_owned(), email: None, picture: None }))
}

// =============================================================
// Loading lifecycle
// =============================================================

#[test]
fn designs_state_defaults() {
    let s = DesignsState::default();
    assert!(s.items.is_empty());
    assert_eq!(s.phase, LoadPhase::Idle);
    assert!(!s.is_loading());
    assert!(s.delete_error.is_none());
}

#[test]
fn begin_load_marks_loading_with_fresh_ticket() {
    let mut s = DesignsState::default();
    let first = s.begin_load();
    let second = s.begin_load();
    assert!(second > first);
    assert!(s.is_loading());
}

#[test]
fn successful_load_replaces_list_wholesale() {
    let mut s = loaded(&["old"]);
    let ticket = s.begin_load();
    assert!(s.finish_load(ticket, Ok(vec![design("a"), design("b")])));
    assert_eq!(ids(&s), ["a", "b"]);
    assert_eq!(s.phase, LoadPhase::Loaded);
}

#[test]
fn failed_load_keeps_previous_items_and_stops_loading() {
    let mut s = loaded(&["a"]);
    let ticket = s.begin_load();
    s.finish_load(ticket, Err(PanelError::Fetch("list request failed: 500".to_owned())));
    assert!(!s.is_loading());
    assert_eq!(s.phase, LoadPhase::Failed(PanelError::Fetch("list request failed: 500".to_owned())));
    assert_eq!(ids(&s), ["a"]);
}

#[test]
fn stale_completion_is_dropped() {
    let mut s = DesignsState::default();
    let stale = s.begin_load();
    let latest = s.begin_load();

    assert!(s.finish_load(latest, Ok(vec![design("new")])));
    assert!(!s.finish_load(stale, Ok(vec![design("old")])));
    assert_eq!(ids(&s), ["new"]);
}

#[test]
fn completion_after_clear_is_dropped() {
    let mut s = DesignsState::default();
    let ticket = s.begin_load();
    s.clear();
    assert!(!s.finish_load(ticket, Ok(vec![design("a")])));
    assert!(s.items.is_empty());
    assert_eq!(s.phase, LoadPhase::Idle);
}

// =============================================================
// Removal
// =============================================================

#[test]
fn remove_present_id_shrinks_by_one() {
    let mut s = loaded(&["a", "b", "c"]);
    assert!(s.remove(&DesignId::new("b")));
    assert_eq!(ids(&s), ["a", "c"]);
}

#[test]
fn remove_absent_id_is_noop() {
    let mut s = loaded(&["a", "b"]);
    let before = s.clone();
    assert!(!s.remove(&DesignId::new("zzz")));
    assert_eq!(s, before);
}

#[test]
fn confirmed_delete_removes_item() {
    let mut s = loaded(&["a", "b"]);
    s.finish_delete(&DesignId::new("a"), &Ok(DeleteOutcome::Deleted));
    assert_eq!(ids(&s), ["b"]);
    assert!(s.delete_error.is_none());
}

#[test]
fn declined_delete_leaves_list_unchanged() {
    let mut s = loaded(&["a", "b"]);
    s.finish_delete(&DesignId::new("a"), &Ok(DeleteOutcome::Declined));
    assert_eq!(ids(&s), ["a", "b"]);
}

#[test]
fn failed_delete_keeps_item_and_records_error() {
    let mut s = loaded(&["a", "b"]);
    let err = PanelError::Delete("delete request failed: 500".to_owned());
    s.finish_delete(&DesignId::new("a"), &Err(err.clone()));
    assert_eq!(ids(&s), ["a", "b"]);
    assert_eq!(s.delete_error, Some(err));

    s.dismiss_delete_error();
    assert!(s.delete_error.is_none());
}

// =============================================================
// panel_view
// =============================================================

#[test]
fn view_unauthenticated_when_signed_out() {
    assert_eq!(panel_view(&AuthState::signed_out(), &DesignsState::default()), PanelView::Unauthenticated);
}

#[test]
fn view_loading_while_provider_resolves() {
    assert_eq!(panel_view(&AuthState::pending(), &DesignsState::default()), PanelView::Loading);
}

#[test]
fn view_loading_before_first_load_completes() {
    let auth = signed_in();
    assert_eq!(panel_view(&auth, &DesignsState::default()), PanelView::Loading);

    let mut s = DesignsState::default();
    s.begin_load();
    assert_eq!(panel_view(&auth, &s), PanelView::Loading);
}

#[test]
fn view_empty_when_loaded_list_is_empty() {
    assert_eq!(panel_view(&signed_in(), &loaded(&[])), PanelView::Empty);
}

#[test]
fn view_ready_with_items() {
    assert_eq!(panel_view(&signed_in(), &loaded(&["a"])), PanelView::Ready);
}

#[test]
fn view_error_carries_failure() {
    let mut s = DesignsState::default();
    let ticket = s.begin_load();
    s.finish_load(ticket, Err(PanelError::Auth("login required".to_owned())));
    assert_eq!(panel_view(&signed_in(), &s), PanelView::Error(PanelError::Auth("login required".to_owned())));
}

#[test]
fn view_becomes_empty_after_last_item_deleted() {
    let mut s = loaded(&["only"]);
    s.finish_delete(&DesignId::new("only"), &Ok(DeleteOutcome::Deleted));
    assert_eq!(panel_view(&signed_in(), &s), PanelView::Empty);
}
