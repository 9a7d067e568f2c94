//! Single binary web server: JSON API over the bracket engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Tournaments are saved as JSON under DATA_DIR (default "data").

use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use pe_tournament_bracket::{
    add_team, connector_paths, enter_score, export_results_csv, import_teams_csv, open_store,
    remove_team, set_seeding, set_teams, Anchor, BracketView, MatchId, SeedingMode, Side,
    Tournament, TournamentError, TournamentId, TournamentStore,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Cached tournament + last activity time (for eviction from memory; the store keeps it).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

struct AppData {
    cache: RwLock<HashMap<TournamentId, TournamentEntry>>,
    store: Box<dyn TournamentStore>,
}

type AppState = Data<AppData>;

/// Tournaments not accessed for this long are dropped from memory (reloaded from the store on demand).
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default)]
    seeding: SeedingMode,
    #[serde(default)]
    teams: Vec<String>,
}

fn default_name() -> String {
    "Class tournament".to_string()
}

#[derive(Deserialize)]
struct TeamsBody {
    teams: Vec<String>,
}

#[derive(Deserialize)]
struct AddTeamBody {
    name: String,
}

#[derive(Deserialize)]
struct SeedingBody {
    seeding: SeedingMode,
}

#[derive(Deserialize)]
struct ScoreBody {
    side: Side,
    /// Raw text from the score field; blank clears it.
    value: String,
}

#[derive(Deserialize)]
struct AnchorsBody {
    anchors: HashMap<MatchId, Anchor>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and team name
#[derive(Deserialize)]
struct TournamentTeamPath {
    id: TournamentId,
    team: String,
}

/// Path segments: tournament id and match id
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

/// Cached entry for `id`, loading it from the store on a cache miss.
fn lookup<'a>(
    store: &dyn TournamentStore,
    cache: &'a mut HashMap<TournamentId, TournamentEntry>,
    id: TournamentId,
) -> Result<&'a mut TournamentEntry, HttpResponse> {
    if !cache.contains_key(&id) {
        match store.load(id) {
            Ok(Some(tournament)) => {
                cache.insert(
                    id,
                    TournamentEntry {
                        tournament,
                        last_activity: Instant::now(),
                    },
                );
            }
            Ok(None) => return Err(not_found()),
            Err(e) => {
                log::error!("Failed to load tournament {}: {}", id, e);
                return Err(HttpResponse::InternalServerError().body("storage error"));
            }
        }
    }
    match cache.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            Ok(entry)
        }
        None => Err(not_found()),
    }
}

/// Write a snapshot to the store on the blocking pool. The in-memory tree is authoritative, so a
/// failed save is logged, not surfaced.
async fn persist(state: &AppState, tournament: Tournament) {
    let id = tournament.id;
    let state = state.clone();
    match web::block(move || state.store.save(&tournament)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => log::warn!("Failed to save tournament {}: {}", id, e),
        Err(e) => log::warn!("Save of tournament {} did not run: {}", id, e),
    }
}

/// Apply a mutation; on success persist and return the tournament, otherwise 400 with the message.
/// The cache lock is released before the store is written.
async fn mutate<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> Result<(), TournamentError>,
{
    let snapshot = {
        let mut g = match state.cache.write() {
            Ok(guard) => guard,
            Err(_) => return lock_error(),
        };
        let entry = match lookup(state.store.as_ref(), &mut g, id) {
            Ok(e) => e,
            Err(resp) => return resp,
        };
        if let Err(e) = f(&mut entry.tournament) {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
        }
        entry.tournament.clone()
    };
    let response = HttpResponse::Ok().json(&snapshot);
    persist(state, snapshot).await;
    response
}

/// Read-only access to a tournament.
fn read<F>(state: &AppData, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&Tournament) -> HttpResponse,
{
    let mut g = match state.cache.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match lookup(state.store.as_ref(), &mut g, id) {
        Ok(entry) => f(&entry.tournament),
        Err(resp) => resp,
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "pe-tournament-bracket",
    })
}

/// Create a new tournament, optionally with an initial roster.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Option<Json<CreateTournamentBody>>) -> HttpResponse {
    let body = body.map(Json::into_inner).unwrap_or(CreateTournamentBody {
        name: default_name(),
        seeding: SeedingMode::default(),
        teams: Vec::new(),
    });
    let mut tournament = Tournament::new(body.name, body.seeding);
    if let Err(e) = set_teams(&mut tournament, body.teams) {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
    }
    let response = HttpResponse::Ok().json(&tournament);
    {
        let mut g = match state.cache.write() {
            Ok(guard) => guard,
            Err(_) => return lock_error(),
        };
        g.insert(
            tournament.id,
            TournamentEntry {
                tournament: tournament.clone(),
                last_activity: Instant::now(),
            },
        );
    }
    persist(&state, tournament).await;
    response
}

/// Get a tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    read(&state, path.id, |t| HttpResponse::Ok().json(t))
}

/// Delete a tournament from memory and the store.
#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.cache.write() {
        Ok(mut g) => g.remove(&path.id),
        Err(_) => return lock_error(),
    };
    let id = path.id;
    let store_state = state.clone();
    match web::block(move || store_state.store.delete(id)).await {
        Ok(Ok(())) => HttpResponse::NoContent().finish(),
        Ok(Err(e)) => {
            log::error!("Failed to delete tournament {}: {}", id, e);
            HttpResponse::InternalServerError().body("storage error")
        }
        Err(e) => {
            log::error!("Delete of tournament {} did not run: {}", id, e);
            HttpResponse::InternalServerError().body("storage error")
        }
    }
}

/// Bracket screen: rounds, round labels, medals and connector edges.
#[get("/api/tournaments/{id}/bracket")]
async fn api_get_bracket(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    read(&state, path.id, |t| {
        HttpResponse::Ok().json(BracketView::from_tournament(t))
    })
}

/// Replace the whole roster (seed order) and rebuild the bracket.
#[put("/api/tournaments/{id}/teams")]
async fn api_set_teams(state: AppState, path: Path<TournamentPath>, body: Json<TeamsBody>) -> HttpResponse {
    let teams = body.into_inner().teams;
    mutate(&state, path.id, |t| set_teams(t, teams)).await
}

/// Add one team as the lowest seed.
#[post("/api/tournaments/{id}/teams")]
async fn api_add_team(state: AppState, path: Path<TournamentPath>, body: Json<AddTeamBody>) -> HttpResponse {
    mutate(&state, path.id, |t| add_team(t, &body.name)).await
}

/// Remove a team; the bracket is rebuilt and scores are discarded.
#[delete("/api/tournaments/{id}/teams/{team}")]
async fn api_remove_team(state: AppState, path: Path<TournamentTeamPath>) -> HttpResponse {
    mutate(&state, path.id, |t| remove_team(t, &path.team)).await
}

/// Replace the roster from a CSV body (one team per row).
#[post("/api/tournaments/{id}/teams/import")]
async fn api_import_teams(state: AppState, path: Path<TournamentPath>, body: String) -> HttpResponse {
    mutate(&state, path.id, |t| {
        let teams = import_teams_csv(body.as_bytes())?;
        set_teams(t, teams)
    })
    .await
}

/// Switch between input-order and random seeding.
#[put("/api/tournaments/{id}/seeding")]
async fn api_set_seeding(state: AppState, path: Path<TournamentPath>, body: Json<SeedingBody>) -> HttpResponse {
    mutate(&state, path.id, |t| {
        set_seeding(t, body.seeding);
        Ok(())
    })
    .await
}

/// Enter one side's score. Invalid input is rejected and nothing changes.
#[put("/api/tournaments/{id}/matches/{match_id}/score")]
async fn api_enter_score(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    mutate(&state, path.id, |t| enter_score(t, path.match_id, body.side, &body.value)).await
}

/// SVG connector paths for the cards the client has painted.
#[post("/api/tournaments/{id}/connectors")]
async fn api_connector_paths(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<AnchorsBody>,
) -> HttpResponse {
    read(&state, path.id, |t| {
        HttpResponse::Ok().json(connector_paths(&t.rounds, &body.anchors))
    })
}

/// Results as CSV, one row per match.
#[get("/api/tournaments/{id}/results.csv")]
async fn api_export_results(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    read(&state, path.id, |t| match export_results_csv(t) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    })
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> String {
    "data".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| default_data_dir());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(AppData {
        cache: RwLock::new(HashMap::new()),
        store: open_store(&data_dir),
    });

    // Background task: every 30 minutes, drop tournaments inactive for 12+ hours from memory
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.cache.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Evicted {} inactive tournament(s) from memory", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_delete_tournament)
            .service(api_get_bracket)
            .service(api_import_teams)
            .service(api_set_teams)
            .service(api_add_team)
            .service(api_remove_team)
            .service(api_set_seeding)
            .service(api_enter_score)
            .service(api_connector_paths)
            .service(api_export_results)
    })
    .bind(bind)?
    .run()
    .await
}
