//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Tournament data, logs, sessions, and the shared secret persist as JSON
//! blobs under the directory named by PLACAR_DATA (default: data).

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key, get, post, put,
    web::{self, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use placar_web::{
    storage, AuditTrail, FiscalContext, FileStorage, GameMatch, GameStatus, ScoreIntent, Sport,
    SportData, Team, TournamentStore,
};
use serde::Deserialize;
use std::sync::RwLock;

/// Everything behind the lock: tournament data, audit trail, the shared
/// secret, and the blob store they persist into.
struct AppCtx {
    store: TournamentStore,
    trail: AuditTrail,
    password: String,
    storage: FileStorage,
}

type AppState = Data<RwLock<AppCtx>>;

/// Cookie session key holding the fiscal's session id.
const SESSION_ID_KEY: &str = "session_id";

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody {
    fiscal_id: String,
    password: String,
}

#[derive(Deserialize)]
struct StatusBody {
    status: GameStatus,
}

#[derive(Deserialize)]
struct PasswordBody {
    password: String,
}

#[derive(Deserialize)]
struct IndexQuery {
    view: Option<String>,
}

/// Path segment: sport name (e.g. /api/bracket/{sport}).
#[derive(Deserialize)]
struct SportPath {
    sport: String,
}

/// Path segments: sport name and match id.
#[derive(Deserialize)]
struct SportMatchPath {
    sport: String,
    id: u32,
}

fn parse_sport(raw: &str) -> Result<Sport, HttpResponse> {
    raw.parse().map_err(|e| {
        HttpResponse::NotFound().json(serde_json::json!({ "error": format!("{}", e) }))
    })
}

/// The acting fiscal, from the cookie session. None when not logged in or the
/// session has been closed.
fn authenticate(session: &Session, ctx: &AppCtx) -> Option<FiscalContext> {
    let id = session.get::<uuid::Uuid>(SESSION_ID_KEY).ok().flatten()?;
    ctx.trail.context_for(id)
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({ "error": "Not logged in" }))
}

fn persist_tournament(ctx: &mut AppCtx) {
    let AppCtx { store, storage, .. } = ctx;
    if let Err(e) = storage::save_store(storage, store) {
        log::error!("failed to persist tournament data: {}", e);
    }
}

fn persist_trail(ctx: &mut AppCtx) {
    let AppCtx { trail, storage, .. } = ctx;
    if let Err(e) = storage::save_logs(storage, &trail.logs) {
        log::error!("failed to persist action logs: {}", e);
    }
    if let Err(e) = storage::save_sessions(storage, &trail.sessions) {
        log::error!("failed to persist fiscal sessions: {}", e);
    }
}

/// Run a match update through the store, record the emitted events against
/// the acting fiscal, and persist both blobs.
fn commit_match_update(
    ctx: &mut AppCtx,
    fiscal: &FiscalContext,
    sport: Sport,
    updated: GameMatch,
) -> SportData {
    let match_id = updated.id;
    let events = ctx.store.update_match(sport, updated);
    for event in events {
        ctx.trail
            .record_action(Some(fiscal), match_id, sport, event.kind, event.details);
    }
    persist_tournament(ctx);
    persist_trail(ctx);
    ctx.store.data(sport).clone()
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "placar-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Current snapshot of one sport's roster and bracket. No auth: this is what
/// the public spectator view reads.
#[get("/api/bracket/{sport}")]
async fn api_get_bracket(state: AppState, path: Path<SportPath>) -> HttpResponse {
    let sport = match parse_sport(&path.sport) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.store.data(sport))
}

/// Log in as a fiscal. The password is the shared secret; a new session is
/// opened on success and its id stored in the cookie session.
#[post("/api/login")]
async fn api_login(state: AppState, session: Session, body: Json<LoginBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let secret = g.password.clone();
    match g.trail.login(&body.fiscal_id, &body.password, &secret) {
        Ok(ctx) => {
            persist_trail(&mut g);
            if session.insert(SESSION_ID_KEY, ctx.session_id).is_err() {
                return HttpResponse::InternalServerError().body("session error");
            }
            log::info!("fiscal {} logged in", ctx.fiscal_id);
            HttpResponse::Ok().json(serde_json::json!({
                "fiscalId": ctx.fiscal_id,
                "sessionId": ctx.session_id,
            }))
        }
        Err(e) => HttpResponse::Unauthorized().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Close the current session. Unknown or already closed sessions are a no-op.
#[post("/api/logout")]
async fn api_logout(state: AppState, session: Session) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    if let Ok(Some(id)) = session.get::<uuid::Uuid>(SESSION_ID_KEY) {
        g.trail.logout(id);
        persist_trail(&mut g);
    }
    session.purge();
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

/// Submit a complete updated match (the single mutation entry point).
#[put("/api/bracket/{sport}/match")]
async fn api_update_match(
    state: AppState,
    session: Session,
    path: Path<SportPath>,
    body: Json<GameMatch>,
) -> HttpResponse {
    let sport = match parse_sport(&path.sport) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(fiscal) = authenticate(&session, &g) else {
        return unauthorized();
    };
    let data = commit_match_update(&mut g, &fiscal, sport, body.into_inner());
    HttpResponse::Ok().json(data)
}

/// Apply one score action (goal, fault, point, set, penalty...) to a match.
#[post("/api/bracket/{sport}/match/{id}/score")]
async fn api_score_intent(
    state: AppState,
    session: Session,
    path: Path<SportMatchPath>,
    body: Json<ScoreIntent>,
) -> HttpResponse {
    let sport = match parse_sport(&path.sport) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(fiscal) = authenticate(&session, &g) else {
        return unauthorized();
    };
    let Some(current) = g.store.find_match(sport, path.id).cloned() else {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No match" }));
    };
    let mut updated = current.clone();
    updated.score = placar_web::apply_intent(&current.score, body.into_inner());
    let data = commit_match_update(&mut g, &fiscal, sport, updated);
    HttpResponse::Ok().json(data)
}

/// Change a match's status. Entering Finished resolves and stamps the winner
/// and advances it into the next round; leaving Finished clears it.
#[post("/api/bracket/{sport}/match/{id}/status")]
async fn api_set_status(
    state: AppState,
    session: Session,
    path: Path<SportMatchPath>,
    body: Json<StatusBody>,
) -> HttpResponse {
    let sport = match parse_sport(&path.sport) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(fiscal) = authenticate(&session, &g) else {
        return unauthorized();
    };
    let Some(current) = g.store.find_match(sport, path.id).cloned() else {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No match" }));
    };
    let mut updated = current;
    updated.status = body.status;
    let data = commit_match_update(&mut g, &fiscal, sport, updated);
    HttpResponse::Ok().json(data)
}

/// Replace a sport's roster wholesale. The in-use check is advisory; the UI
/// is expected to consult teams-in-use before deleting.
#[put("/api/bracket/{sport}/teams")]
async fn api_update_teams(
    state: AppState,
    session: Session,
    path: Path<SportPath>,
    body: Json<Vec<Team>>,
) -> HttpResponse {
    let sport = match parse_sport(&path.sport) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    if authenticate(&session, &g).is_none() {
        return unauthorized();
    }
    g.store.update_teams(sport, body.into_inner());
    persist_tournament(&mut g);
    HttpResponse::Ok().json(g.store.data(sport))
}

/// Team ids currently occupying a bracket slot (deletion guard for the UI).
#[get("/api/bracket/{sport}/teams-in-use")]
async fn api_teams_in_use(state: AppState, path: Path<SportPath>) -> HttpResponse {
    let sport = match parse_sport(&path.sport) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.store.teams_in_use(sport))
}

/// Reset one sport to its canonical seed bracket. Irreversible; confirmation
/// is the UI's responsibility.
#[post("/api/bracket/{sport}/reset")]
async fn api_reset(state: AppState, session: Session, path: Path<SportPath>) -> HttpResponse {
    let sport = match parse_sport(&path.sport) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(fiscal) = authenticate(&session, &g) else {
        return unauthorized();
    };
    g.store.reset_tournament(sport);
    persist_tournament(&mut g);
    log::info!("fiscal {} reset the {} tournament", fiscal.fiscal_id, sport);
    HttpResponse::Ok().json(g.store.data(sport))
}

/// Combined history feed: actions, logins, and logouts, newest first.
#[get("/api/history")]
async fn api_history(state: AppState, session: Session) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    if authenticate(&session, &g).is_none() {
        return unauthorized();
    }
    HttpResponse::Ok().json(g.trail.history())
}

/// Change the shared secret.
#[put("/api/password")]
async fn api_change_password(
    state: AppState,
    session: Session,
    body: Json<PasswordBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    if authenticate(&session, &g).is_none() {
        return unauthorized();
    }
    g.password = body.password.clone();
    let AppCtx { password, storage: blob_store, .. } = &mut *g;
    if let Err(e) = storage::save_password(blob_store, password) {
        log::error!("failed to persist password: {}", e);
    }
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

/// Serve the single-page UI. A `view=futsal|volleyball` query parameter
/// activates the read-only spectator render of that sport (the page itself
/// suppresses all mutation controls in that mode).
async fn serve_index(query: Query<IndexQuery>) -> HttpResponse {
    if let Some(view) = &query.view {
        if view.parse::<Sport>().is_err() {
            log::debug!("ignoring unknown spectator view {:?}", view);
        }
    }
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_dir = std::env::var("PLACAR_DATA").unwrap_or_else(|_| "data".to_string());

    let mut blob_store = FileStorage::new(&data_dir)?;
    let store = storage::load_store(&blob_store);
    let trail = AuditTrail::new(
        storage::load_logs(&blob_store),
        storage::load_sessions(&blob_store),
    );
    let password = storage::load_or_init_password(&mut blob_store);
    log::info!(
        "loaded {} log entries and {} sessions from {}",
        trail.logs.len(),
        trail.sessions.len(),
        data_dir
    );

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(AppCtx {
        store,
        trail,
        password,
        storage: blob_store,
    }));
    let session_key = Key::generate();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .route("/", web::get().to(serve_index))
            .service(api_health)
            .service(favicon)
            .service(api_get_bracket)
            .service(api_login)
            .service(api_logout)
            .service(api_update_match)
            .service(api_score_intent)
            .service(api_set_status)
            .service(api_update_teams)
            .service(api_teams_in_use)
            .service(api_reset)
            .service(api_history)
            .service(api_change_password)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}
