//! In-process stand-in for the hotel backend REST API
//!
//! Speaks the backend's wire format (Spanish resource paths and field
//! names) using the same models the console's client decodes, keeps
//! everything in memory and issues HS256 tokens signed with
//! [`JWT_SECRET`].

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use chrono::{Duration, Utc};
use hospeda_backend::models::{
    GuestModel, GuestPayload, InvoiceLineModel, InvoiceLinePayload, InvoiceModel, InvoicePayload,
    LoginRequest, LoginResponse, ReservationLineModel, ReservationModel, ReservationPayload,
    RoomModel, RoomPayload, RoomRef, UserModel,
};
use hospeda_common::{Claims, JwtService};
use hospeda_core::{EntityId, PaymentMethod, RoomStatus, RoomType, StaffRole};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Secret shared by the fake backend and the console under test
pub const JWT_SECRET: &str = "integration-test-secret";

/// Password accepted for every seeded account
pub const PASSWORD: &str = "secreto";

pub const ADMIN_EMAIL: &str = "admin@hospeda.test";
pub const RECEPTIONIST_EMAIL: &str = "recepcion@hospeda.test";

type Failure = (StatusCode, Json<Value>);
type Reply = Result<Json<Value>, Failure>;

fn fail(status: StatusCode, message: &str) -> Failure {
    (status, Json(json!({ "message": message })))
}

fn not_found(resource: &str) -> Failure {
    fail(StatusCode::NOT_FOUND, &format!("{resource} no encontrado"))
}

fn to_json<T: serde::Serialize>(value: &T) -> Reply {
    serde_json::to_value(value)
        .map(Json)
        .map_err(|e| fail(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()))
}

/// Everything the backend stores
#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    pub rooms: Vec<RoomModel>,
    pub guests: Vec<GuestModel>,
    pub reservations: Vec<ReservationModel>,
    pub invoices: Vec<InvoiceModel>,
    pub invoice_lines: Vec<InvoiceLineModel>,
    pub users: Vec<UserModel>,
}

impl Store {
    fn next_id(&mut self) -> EntityId {
        self.next_id += 1;
        EntityId::new(self.next_id)
    }

    /// Two free rooms, one under maintenance, one guest and two staff accounts
    pub fn seeded() -> Self {
        let mut store = Self {
            next_id: 100,
            ..Self::default()
        };

        store.rooms = vec![
            room(1, 101, RoomType::Individual, 50, RoomStatus::Free),
            room(2, 102, RoomType::Doble, 80, RoomStatus::Free),
            room(3, 201, RoomType::Triple, 120, RoomStatus::Maintenance),
        ];
        store.guests = vec![GuestModel {
            id_huesped: EntityId::new(1),
            nombre: "Lucía".to_string(),
            apellidos: "Fernández Ruiz".to_string(),
            documento_identidad: "12345678Z".to_string(),
            email: Some("lucia@example.com".to_string()),
            telefono: Some("+34 600 000 000".to_string()),
            fecha_registro: chrono::NaiveDate::from_ymd_opt(2024, 1, 15),
        }];
        store.users = vec![
            user(1, "admin", ADMIN_EMAIL, StaffRole::Admin),
            user(2, "recepcion", RECEPTIONIST_EMAIL, StaffRole::Receptionist),
        ];
        store
    }

    fn room_number(&self, id: EntityId) -> Option<u32> {
        self.rooms
            .iter()
            .find(|room| room.id_habitacion == id)
            .map(|room| room.numero)
    }

    fn reservation_from(&mut self, id: EntityId, payload: ReservationPayload) -> ReservationModel {
        let lines = payload
            .detalles_reserva
            .into_iter()
            .map(|line| ReservationLineModel {
                id_detalle: Some(self.next_id()),
                id_reserva: Some(id),
                id_habitacion: Some(line.id_habitacion),
                noches: line.noches,
                precio_aplicado: line.precio_aplicado,
                habitacion: self
                    .room_number(line.id_habitacion)
                    .map(|numero| RoomRef { numero }),
            })
            .collect();

        ReservationModel {
            id_reserva: id,
            id_huesped: payload.id_huesped,
            fecha_entrada: Some(payload.fecha_inicio),
            fecha_salida: Some(payload.fecha_fin),
            id_habitacion: None,
            huesped: None,
            detalles_reserva: lines,
        }
    }
}

fn room(id: i64, numero: u32, tipo: RoomType, rate: i64, estado: RoomStatus) -> RoomModel {
    RoomModel {
        id_habitacion: EntityId::new(id),
        numero,
        tipo,
        precio_base: Decimal::from(rate),
        estado,
        capacidad: 2,
        foto: None,
    }
}

fn user(id: i64, name: &str, email: &str, rol: StaffRole) -> UserModel {
    UserModel {
        id_usuario: EntityId::new(id),
        nombre_usuario: name.to_string(),
        email: email.to_string(),
        rol,
        ultimo_acceso: Some(Utc::now()),
    }
}

#[derive(Clone)]
struct BackendState {
    store: Arc<Mutex<Store>>,
    jwt: Arc<JwtService>,
}

impl BackendState {
    fn authorize(&self, headers: &HeaderMap) -> Result<(), Failure> {
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .and_then(|token| self.jwt.decode_token(token).ok())
            .map(|_| ())
            .ok_or_else(|| fail(StatusCode::UNAUTHORIZED, "Token inválido"))
    }
}

/// Running fake backend
pub struct FakeBackend {
    pub addr: SocketAddr,
    store: Arc<Mutex<Store>>,
    _handle: JoinHandle<()>,
}

impl FakeBackend {
    /// Serve a seeded backend on an ephemeral port
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(Store::seeded()).await
    }

    pub async fn start_with(store: Store) -> anyhow::Result<Self> {
        let store = Arc::new(Mutex::new(store));
        let state = BackendState {
            store: Arc::clone(&store),
            jwt: Arc::new(JwtService::new(Some(JWT_SECRET), 0)),
        };

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = router().with_state(state);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            store,
            _handle: handle,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Inspect or tweak the stored data
    pub fn with_store<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        f(&mut self.store.lock())
    }
}

fn router() -> Router<BackendState> {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/auth/login", axum::routing::post(login))
        .route("/habitacion", get(list_rooms).post(create_room))
        .route("/habitacion/tipo", get(rooms_by_type))
        .route(
            "/habitacion/:id",
            get(get_room).put(update_room).delete(delete_room),
        )
        .route("/huesped", get(list_guests).post(create_guest))
        .route("/huesped/:id", get(get_guest).put(update_guest))
        .route("/reserva", get(list_reservations).post(create_reservation))
        .route(
            "/reserva/:id",
            get(get_reservation)
                .put(update_reservation)
                .delete(delete_reservation),
        )
        .route("/detalle-reserva/reserva", get(reservation_lines))
        .route("/factura", get(list_invoices).post(create_invoice))
        .route("/factura/metodo-pago", get(invoices_by_method))
        .route(
            "/factura/:id",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
        .route("/detalle-factura", axum::routing::post(create_invoice_line))
        .route("/detalle-factura/factura", get(invoice_lines))
        .route(
            "/detalle-factura/:id",
            get(get_invoice_line)
                .put(update_invoice_line)
                .delete(delete_invoice_line),
        )
        .route("/usuario", get(list_users))
}

// ============================================================================
// Auth
// ============================================================================

async fn login(State(state): State<BackendState>, Json(request): Json<LoginRequest>) -> Reply {
    let account = state
        .store
        .lock()
        .users
        .iter()
        .find(|user| user.email == request.email)
        .cloned();

    let Some(account) = account.filter(|_| request.password == PASSWORD) else {
        return Err(fail(StatusCode::UNAUTHORIZED, "Credenciales inválidas"));
    };

    let claims = Claims {
        sub: Some(account.id_usuario.to_string()),
        email: Some(account.email.clone()),
        username: Some(account.nombre_usuario.clone()),
        rol: account.rol,
        exp: (Utc::now() + Duration::hours(1)).timestamp(),
        iat: Some(Utc::now().timestamp()),
    };
    let token = state
        .jwt
        .issue_token(&claims)
        .map_err(|e| fail(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()))?;

    to_json(&LoginResponse {
        access_token: token,
    })
}

// ============================================================================
// Rooms
// ============================================================================

async fn list_rooms(State(state): State<BackendState>, headers: HeaderMap) -> Reply {
    state.authorize(&headers)?;
    to_json(&state.store.lock().rooms)
}

#[derive(Deserialize)]
struct TypeQuery {
    tipo: RoomType,
}

async fn rooms_by_type(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Query(query): Query<TypeQuery>,
) -> Reply {
    state.authorize(&headers)?;
    let rooms: Vec<RoomModel> = state
        .store
        .lock()
        .rooms
        .iter()
        .filter(|room| room.tipo == query.tipo)
        .cloned()
        .collect();
    to_json(&rooms)
}

async fn get_room(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
) -> Reply {
    state.authorize(&headers)?;
    let store = state.store.lock();
    let room = store
        .rooms
        .iter()
        .find(|room| room.id_habitacion == id)
        .ok_or_else(|| not_found("Habitación"))?;
    to_json(room)
}

async fn create_room(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Json(payload): Json<RoomPayload>,
) -> Reply {
    state.authorize(&headers)?;
    let mut store = state.store.lock();
    if store.rooms.iter().any(|room| room.numero == payload.numero) {
        return Err(fail(StatusCode::CONFLICT, "Número de habitación duplicado"));
    }
    let id = store.next_id();
    store.rooms.push(RoomModel {
        id_habitacion: id,
        numero: payload.numero,
        tipo: payload.tipo,
        precio_base: payload.precio_base,
        estado: payload.estado,
        capacidad: payload.capacidad,
        foto: payload.foto,
    });
    Ok(Json(json!({ "message": "Habitación creada", "id_habitacion": id })))
}

async fn update_room(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
    Json(payload): Json<RoomPayload>,
) -> Reply {
    state.authorize(&headers)?;
    let mut store = state.store.lock();
    let room = store
        .rooms
        .iter_mut()
        .find(|room| room.id_habitacion == id)
        .ok_or_else(|| not_found("Habitación"))?;
    room.numero = payload.numero;
    room.tipo = payload.tipo;
    room.precio_base = payload.precio_base;
    room.estado = payload.estado;
    room.capacidad = payload.capacidad;
    room.foto = payload.foto;
    Ok(Json(json!({ "message": "Habitación actualizada" })))
}

async fn delete_room(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
) -> Reply {
    state.authorize(&headers)?;
    let mut store = state.store.lock();
    let before = store.rooms.len();
    store.rooms.retain(|room| room.id_habitacion != id);
    if store.rooms.len() == before {
        return Err(not_found("Habitación"));
    }
    Ok(Json(json!({ "message": "Habitación eliminada" })))
}

// ============================================================================
// Guests
// ============================================================================

async fn list_guests(State(state): State<BackendState>, headers: HeaderMap) -> Reply {
    state.authorize(&headers)?;
    to_json(&state.store.lock().guests)
}

async fn get_guest(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
) -> Reply {
    state.authorize(&headers)?;
    let store = state.store.lock();
    let guest = store
        .guests
        .iter()
        .find(|guest| guest.id_huesped == id)
        .ok_or_else(|| not_found("Huésped"))?;
    to_json(guest)
}

async fn create_guest(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Json(payload): Json<GuestPayload>,
) -> Reply {
    state.authorize(&headers)?;
    let mut store = state.store.lock();
    let id = store.next_id();
    store.guests.push(GuestModel {
        id_huesped: id,
        nombre: payload.nombre,
        apellidos: payload.apellidos,
        documento_identidad: payload.documento_identidad,
        email: payload.email,
        telefono: payload.telefono,
        fecha_registro: payload.fecha_registro,
    });
    Ok(Json(json!({ "id_huesped": id })))
}

async fn update_guest(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
    Json(payload): Json<GuestPayload>,
) -> Reply {
    state.authorize(&headers)?;
    let mut store = state.store.lock();
    let guest = store
        .guests
        .iter_mut()
        .find(|guest| guest.id_huesped == id)
        .ok_or_else(|| not_found("Huésped"))?;
    guest.nombre = payload.nombre;
    guest.apellidos = payload.apellidos;
    guest.documento_identidad = payload.documento_identidad;
    guest.email = payload.email;
    guest.telefono = payload.telefono;
    Ok(Json(json!({ "message": "Huésped actualizado" })))
}

// ============================================================================
// Reservations
// ============================================================================

async fn list_reservations(State(state): State<BackendState>, headers: HeaderMap) -> Reply {
    state.authorize(&headers)?;
    to_json(&state.store.lock().reservations)
}

async fn get_reservation(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
) -> Reply {
    state.authorize(&headers)?;
    let store = state.store.lock();
    let reservation = store
        .reservations
        .iter()
        .find(|reservation| reservation.id_reserva == id)
        .ok_or_else(|| not_found("Reserva"))?;
    to_json(reservation)
}

async fn create_reservation(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Json(payload): Json<ReservationPayload>,
) -> Reply {
    state.authorize(&headers)?;
    let mut store = state.store.lock();
    let id = store.next_id();
    let reservation = store.reservation_from(id, payload);
    store.reservations.push(reservation);
    Ok(Json(json!({ "id_reserva": id })))
}

async fn update_reservation(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
    Json(payload): Json<ReservationPayload>,
) -> Reply {
    state.authorize(&headers)?;
    let mut store = state.store.lock();
    let position = store
        .reservations
        .iter()
        .position(|reservation| reservation.id_reserva == id)
        .ok_or_else(|| not_found("Reserva"))?;
    let updated = store.reservation_from(id, payload);
    store.reservations[position] = updated;
    Ok(Json(json!({ "message": "Reserva actualizada" })))
}

async fn delete_reservation(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
) -> Reply {
    state.authorize(&headers)?;
    let mut store = state.store.lock();
    let before = store.reservations.len();
    store.reservations.retain(|reservation| reservation.id_reserva != id);
    if store.reservations.len() == before {
        return Err(not_found("Reserva"));
    }
    Ok(Json(json!({ "message": "Reserva eliminada" })))
}

#[derive(Deserialize)]
struct ReservationLinesQuery {
    id_reserva: EntityId,
}

async fn reservation_lines(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Query(query): Query<ReservationLinesQuery>,
) -> Reply {
    state.authorize(&headers)?;
    let store = state.store.lock();
    let lines: Vec<ReservationLineModel> = store
        .reservations
        .iter()
        .filter(|reservation| reservation.id_reserva == query.id_reserva)
        .flat_map(|reservation| reservation.detalles_reserva.clone())
        .collect();
    to_json(&lines)
}

// ============================================================================
// Invoices
// ============================================================================

async fn list_invoices(State(state): State<BackendState>, headers: HeaderMap) -> Reply {
    state.authorize(&headers)?;
    to_json(&state.store.lock().invoices)
}

#[derive(Deserialize)]
struct MethodQuery {
    metodo: PaymentMethod,
}

async fn invoices_by_method(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Query(query): Query<MethodQuery>,
) -> Reply {
    state.authorize(&headers)?;
    let invoices: Vec<InvoiceModel> = state
        .store
        .lock()
        .invoices
        .iter()
        .filter(|invoice| invoice.metodo_pago == query.metodo)
        .cloned()
        .collect();
    to_json(&invoices)
}

async fn get_invoice(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
) -> Reply {
    state.authorize(&headers)?;
    let store = state.store.lock();
    let invoice = store
        .invoices
        .iter()
        .find(|invoice| invoice.id_factura == id)
        .ok_or_else(|| not_found("Factura"))?;
    to_json(invoice)
}

async fn create_invoice(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Json(payload): Json<InvoicePayload>,
) -> Reply {
    state.authorize(&headers)?;
    let mut store = state.store.lock();
    if let Some(existing) = store
        .invoices
        .iter()
        .find(|invoice| invoice.id_reserva == payload.id_reserva)
    {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "message": format!("Ya existe una factura para la reserva {}", payload.id_reserva),
                "id_factura": existing.id_factura,
            })),
        ));
    }

    let id = store.next_id();
    store.invoices.push(InvoiceModel {
        id_factura: id,
        fecha: Some(payload.fecha),
        id_reserva: payload.id_reserva,
        monto_total: payload.monto_total,
        descuento: payload.descuento,
        metodo_pago: payload.metodo_pago,
        estado: payload.estado,
        reserva: None,
        detalles_factura: Vec::new(),
    });
    Ok(Json(json!({ "id_factura": id })))
}

async fn update_invoice(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
    Json(payload): Json<InvoicePayload>,
) -> Reply {
    state.authorize(&headers)?;
    let mut store = state.store.lock();
    let invoice = store
        .invoices
        .iter_mut()
        .find(|invoice| invoice.id_factura == id)
        .ok_or_else(|| not_found("Factura"))?;
    invoice.fecha = Some(payload.fecha);
    invoice.monto_total = payload.monto_total;
    invoice.descuento = payload.descuento;
    invoice.metodo_pago = payload.metodo_pago;
    invoice.estado = payload.estado;
    Ok(Json(json!({ "message": "Factura actualizada" })))
}

async fn delete_invoice(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
) -> Reply {
    state.authorize(&headers)?;
    let mut store = state.store.lock();
    let before = store.invoices.len();
    store.invoices.retain(|invoice| invoice.id_factura != id);
    if store.invoices.len() == before {
        return Err(not_found("Factura"));
    }
    store.invoice_lines.retain(|line| line.id_factura != id);
    Ok(Json(json!({ "message": "Factura eliminada" })))
}

// ============================================================================
// Invoice lines
// ============================================================================

#[derive(Deserialize)]
struct InvoiceLinesQuery {
    id_factura: EntityId,
}

async fn invoice_lines(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Query(query): Query<InvoiceLinesQuery>,
) -> Reply {
    state.authorize(&headers)?;
    let lines: Vec<InvoiceLineModel> = state
        .store
        .lock()
        .invoice_lines
        .iter()
        .filter(|line| line.id_factura == query.id_factura)
        .cloned()
        .collect();
    to_json(&lines)
}

async fn get_invoice_line(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
) -> Reply {
    state.authorize(&headers)?;
    let store = state.store.lock();
    let line = store
        .invoice_lines
        .iter()
        .find(|line| line.id_detalle == id)
        .ok_or_else(|| not_found("Detalle"))?;
    to_json(line)
}

async fn create_invoice_line(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Json(payload): Json<InvoiceLinePayload>,
) -> Reply {
    state.authorize(&headers)?;
    let mut store = state.store.lock();
    let id = store.next_id();
    store.invoice_lines.push(InvoiceLineModel {
        id_detalle: id,
        id_factura: payload.id_factura,
        descripcion: payload.descripcion,
        cantidad: payload.cantidad,
        precio_unitario: payload.precio_unitario,
    });
    Ok(Json(json!({ "id_detalle": id })))
}

async fn update_invoice_line(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
    Json(payload): Json<InvoiceLinePayload>,
) -> Reply {
    state.authorize(&headers)?;
    let mut store = state.store.lock();
    let line = store
        .invoice_lines
        .iter_mut()
        .find(|line| line.id_detalle == id)
        .ok_or_else(|| not_found("Detalle"))?;
    line.descripcion = payload.descripcion;
    line.cantidad = payload.cantidad;
    line.precio_unitario = payload.precio_unitario;
    Ok(Json(json!({ "message": "Detalle actualizado" })))
}

async fn delete_invoice_line(
    State(state): State<BackendState>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
) -> Reply {
    state.authorize(&headers)?;
    let mut store = state.store.lock();
    let before = store.invoice_lines.len();
    store.invoice_lines.retain(|line| line.id_detalle != id);
    if store.invoice_lines.len() == before {
        return Err(not_found("Detalle"));
    }
    Ok(Json(json!({ "message": "Detalle eliminado" })))
}

// ============================================================================
// Users
// ============================================================================

async fn list_users(State(state): State<BackendState>, headers: HeaderMap) -> Reply {
    state.authorize(&headers)?;
    to_json(&state.store.lock().users)
}
