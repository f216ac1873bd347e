use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;
use shared::{ChatMessage, FileNode, MessageRole};

// =============================================================================
// STUB COLLABORATORS
// =============================================================================

#[derive(Clone)]
struct StubAuth {
    result: Result<AuthResult, String>,
}

impl AuthGateway for StubAuth {
    async fn sign_in(&self, _email: &str, _password: &str) -> Result<AuthResult, String> {
        self.result.clone()
    }

    async fn sign_up(&self, _email: &str, _password: &str) -> Result<AuthResult, String> {
        self.result.clone()
    }
}

struct StubProjects {
    list: Result<Vec<Project>, String>,
    create: Result<(), String>,
    created: Rc<RefCell<Vec<CreateProjectRequest>>>,
    list_calls: Rc<RefCell<usize>>,
}

impl StubProjects {
    fn new(list: Result<Vec<Project>, String>) -> Self {
        Self {
            list,
            create: Ok(()),
            created: Rc::new(RefCell::new(Vec::new())),
            list_calls: Rc::new(RefCell::new(0)),
        }
    }
}

impl ProjectGateway for StubProjects {
    async fn create_project(&self, request: &CreateProjectRequest) -> Result<Project, String> {
        self.created.borrow_mut().push(request.clone());
        self.create.clone()?;
        Ok(project("p-new", "2026-01-01T00:00:00Z"))
    }

    async fn list_projects(&self) -> Result<Vec<Project>, String> {
        *self.list_calls.borrow_mut() += 1;
        self.list.clone()
    }
}

struct StubStore {
    work: Option<AnonWork>,
    cleared: Rc<RefCell<usize>>,
}

impl StubStore {
    fn new(work: Option<AnonWork>) -> Self {
        Self { work, cleared: Rc::new(RefCell::new(0)) }
    }
}

impl AnonWorkStore for StubStore {
    fn get(&self) -> Option<AnonWork> {
        self.work.clone()
    }

    fn clear(&self) {
        *self.cleared.borrow_mut() += 1;
    }
}

fn project(id: &str, updated_at: &str) -> Project {
    Project {
        id: id.to_owned(),
        name: format!("project {id}"),
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        updated_at: updated_at.to_owned(),
    }
}

fn message(content: &str) -> ChatMessage {
    ChatMessage {
        id: "m1".to_owned(),
        role: MessageRole::User,
        content: content.to_owned(),
    }
}

type Recorded = Rc<RefCell<Vec<String>>>;
type LoadingLog = Rc<RefCell<Vec<bool>>>;

fn flow(
    auth: StubAuth,
    projects: StubProjects,
    store: StubStore,
) -> (
    AuthFlow<StubAuth, StubProjects, StubStore, impl Fn(&str), impl Fn(bool)>,
    Recorded,
    LoadingLog,
) {
    let navigations: Recorded = Rc::new(RefCell::new(Vec::new()));
    let loading: LoadingLog = Rc::new(RefCell::new(Vec::new()));
    let nav_log = Rc::clone(&navigations);
    let load_log = Rc::clone(&loading);
    let flow = AuthFlow {
        auth,
        projects,
        anon_work: store,
        navigate: move |path: &str| nav_log.borrow_mut().push(path.to_owned()),
        set_loading: move |on: bool| load_log.borrow_mut().push(on),
    };
    (flow, navigations, loading)
}

// =============================================================================
// DESTINATION 1 — adopting anonymous work
// =============================================================================

#[test]
fn anon_work_is_adopted_into_a_new_project() {
    let mut data = FileSystemData::new();
    data.insert("/App.jsx".to_owned(), FileNode::file("export default App;"));
    let work = AnonWork { messages: vec![message("make a card")], file_system_data: Some(data.clone()) };

    let projects = StubProjects::new(Ok(vec![project("p-old", "2026-02-02T00:00:00Z")]));
    let created = Rc::clone(&projects.created);
    let list_calls = Rc::clone(&projects.list_calls);
    let store = StubStore::new(Some(work));
    let cleared = Rc::clone(&store.cleared);
    let (flow, navigations, _) = flow(StubAuth { result: Ok(AuthResult::ok()) }, projects, store);

    let result = block_on(flow.sign_in("a@b.c", "secret123")).unwrap();

    assert!(result.success);
    let created = created.borrow();
    assert_eq!(created.len(), 1);
    assert!(created[0].name.starts_with("Design from "), "got {:?}", created[0].name);
    assert_eq!(created[0].messages, vec![message("make a card")]);
    assert_eq!(created[0].data.as_ref(), Some(&data));
    assert_eq!(*cleared.borrow(), 1);
    // Existing projects are never consulted on this path.
    assert_eq!(*list_calls.borrow(), 0);
    assert_eq!(*navigations.borrow(), vec!["/p-new".to_owned()]);
}

#[test]
fn missing_snapshot_is_adopted_as_missing() {
    let work = AnonWork { messages: vec![message("hello")], file_system_data: None };
    let projects = StubProjects::new(Ok(Vec::new()));
    let created = Rc::clone(&projects.created);
    let (flow, _, _) = flow(StubAuth { result: Ok(AuthResult::ok()) }, projects, StubStore::new(Some(work)));

    block_on(flow.sign_in("a@b.c", "secret123")).unwrap();

    assert_eq!(created.borrow()[0].data, None);
}

#[test]
fn anon_work_with_no_messages_is_ignored() {
    let work = AnonWork { messages: Vec::new(), file_system_data: Some(FileSystemData::new()) };
    let projects = StubProjects::new(Ok(vec![project("p-old", "2026-02-02T00:00:00Z")]));
    let created = Rc::clone(&projects.created);
    let store = StubStore::new(Some(work));
    let cleared = Rc::clone(&store.cleared);
    let (flow, navigations, _) = flow(StubAuth { result: Ok(AuthResult::ok()) }, projects, store);

    block_on(flow.sign_in("a@b.c", "secret123")).unwrap();

    assert!(created.borrow().is_empty());
    assert_eq!(*cleared.borrow(), 0);
    assert_eq!(*navigations.borrow(), vec!["/p-old".to_owned()]);
}

#[test]
fn create_failure_leaves_anon_work_parked() {
    let work = AnonWork { messages: vec![message("hi")], file_system_data: None };
    let mut projects = StubProjects::new(Ok(Vec::new()));
    projects.create = Err("project create failed: 500".to_owned());
    let store = StubStore::new(Some(work));
    let cleared = Rc::clone(&store.cleared);
    let (flow, navigations, loading) = flow(StubAuth { result: Ok(AuthResult::ok()) }, projects, store);

    let result = block_on(flow.sign_in("a@b.c", "secret123"));

    assert_eq!(result, Err("project create failed: 500".to_owned()));
    assert_eq!(*cleared.borrow(), 0);
    assert!(navigations.borrow().is_empty());
    assert_eq!(*loading.borrow(), vec![true, false]);
}

// =============================================================================
// DESTINATION 2 — most recently updated project
// =============================================================================

#[test]
fn most_recently_updated_project_wins() {
    let projects = StubProjects::new(Ok(vec![
        project("p1", "2026-03-01T00:00:00Z"),
        project("p2", "2026-03-05T00:00:00Z"),
        project("p3", "2026-03-03T00:00:00Z"),
    ]));
    let created = Rc::clone(&projects.created);
    let store = StubStore::new(None);
    let cleared = Rc::clone(&store.cleared);
    let (flow, navigations, _) = flow(StubAuth { result: Ok(AuthResult::ok()) }, projects, store);

    block_on(flow.sign_in("a@b.c", "secret123")).unwrap();

    assert!(created.borrow().is_empty());
    assert_eq!(*cleared.borrow(), 0);
    assert_eq!(*navigations.borrow(), vec!["/p2".to_owned()]);
}

#[test]
fn updated_at_tie_keeps_first_in_received_order() {
    let projects = StubProjects::new(Ok(vec![
        project("p1", "2026-03-05T00:00:00Z"),
        project("p2", "2026-03-05T00:00:00Z"),
    ]));
    let (flow, navigations, _) = flow(StubAuth { result: Ok(AuthResult::ok()) }, projects, StubStore::new(None));

    block_on(flow.sign_in("a@b.c", "secret123")).unwrap();

    assert_eq!(*navigations.borrow(), vec!["/p1".to_owned()]);
}

// =============================================================================
// DESTINATION 3 — fresh placeholder project
// =============================================================================

#[test]
fn empty_project_list_creates_placeholder() {
    let projects = StubProjects::new(Ok(Vec::new()));
    let created = Rc::clone(&projects.created);
    let (flow, navigations, _) = flow(StubAuth { result: Ok(AuthResult::ok()) }, projects, StubStore::new(None));

    block_on(flow.sign_in("a@b.c", "secret123")).unwrap();

    let created = created.borrow();
    assert_eq!(created.len(), 1);
    assert!(created[0].name.starts_with("New Design #"), "got {:?}", created[0].name);
    assert!(created[0].messages.is_empty());
    // Empty snapshot, not an absent one.
    assert_eq!(created[0].data.as_ref(), Some(&FileSystemData::new()));
    assert_eq!(*navigations.borrow(), vec!["/p-new".to_owned()]);
}

// =============================================================================
// REJECTION AND FAILURE PATHS
// =============================================================================

#[test]
fn credential_rejection_takes_no_destination() {
    let projects = StubProjects::new(Ok(vec![project("p1", "2026-03-01T00:00:00Z")]));
    let created = Rc::clone(&projects.created);
    let list_calls = Rc::clone(&projects.list_calls);
    let store = StubStore::new(Some(AnonWork {
        messages: vec![message("parked")],
        file_system_data: None,
    }));
    let cleared = Rc::clone(&store.cleared);
    let (flow, navigations, loading) = flow(
        StubAuth { result: Ok(AuthResult::failed("Invalid credentials")) },
        projects,
        store,
    );

    let result = block_on(flow.sign_in("a@b.c", "wrong")).unwrap();

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("Invalid credentials"));
    assert!(created.borrow().is_empty());
    assert_eq!(*list_calls.borrow(), 0);
    assert_eq!(*cleared.borrow(), 0);
    assert!(navigations.borrow().is_empty());
    assert_eq!(*loading.borrow(), vec![true, false]);
}

#[test]
fn transport_failure_propagates_and_releases_loading() {
    let projects = StubProjects::new(Ok(Vec::new()));
    let (flow, navigations, loading) = flow(
        StubAuth { result: Err("sign in failed: 502".to_owned()) },
        projects,
        StubStore::new(None),
    );

    let result = block_on(flow.sign_in("a@b.c", "secret123"));

    assert_eq!(result, Err("sign in failed: 502".to_owned()));
    assert!(navigations.borrow().is_empty());
    assert_eq!(*loading.borrow(), vec![true, false]);
}

#[test]
fn project_list_failure_propagates() {
    let projects = StubProjects::new(Err("project list failed: 500".to_owned()));
    let (flow, navigations, loading) = flow(StubAuth { result: Ok(AuthResult::ok()) }, projects, StubStore::new(None));

    let result = block_on(flow.sign_in("a@b.c", "secret123"));

    assert_eq!(result, Err("project list failed: 500".to_owned()));
    assert!(navigations.borrow().is_empty());
    assert_eq!(*loading.borrow(), vec![true, false]);
}

// =============================================================================
// SIGN-UP SYMMETRY
// =============================================================================

#[test]
fn sign_up_follows_the_same_destinations() {
    let work = AnonWork { messages: vec![message("first draft")], file_system_data: None };
    let projects = StubProjects::new(Ok(Vec::new()));
    let created = Rc::clone(&projects.created);
    let store = StubStore::new(Some(work));
    let cleared = Rc::clone(&store.cleared);
    let (flow, navigations, loading) = flow(StubAuth { result: Ok(AuthResult::ok()) }, projects, store);

    let result = block_on(flow.sign_up("a@b.c", "secret123")).unwrap();

    assert!(result.success);
    assert_eq!(created.borrow().len(), 1);
    assert_eq!(*cleared.borrow(), 1);
    assert_eq!(*navigations.borrow(), vec!["/p-new".to_owned()]);
    assert_eq!(*loading.borrow(), vec![true, false]);
}

// =============================================================================
// NAME HELPERS
// =============================================================================

#[test]
fn project_name_helpers_format_as_expected() {
    assert_eq!(adopted_project_name("3:42:17 PM"), "Design from 3:42:17 PM");
    assert_eq!(placeholder_project_name(1_700_000_000_000), "New Design #1700000000000");
}

#[test]
fn current_time_label_is_nonempty() {
    assert!(!current_time_label().is_empty());
}
