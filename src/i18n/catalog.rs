// SPDX-License-Identifier: PMPL-1.0-or-later

//! Spanish display strings for every SDK constant family.
//!
//! Embedded at compile time as static `(key, display)` slices, one per
//! [`Category`], in declaration order. Keys are the raw SDK constants
//! exactly as the React Native, iOS and Android SDKs emit them.
//!
//! ## Adding a constant
//!
//! 1. Append the `("KEY", "Texto")` pair to the matching table below
//! 2. Run `sentiance-es check --docs <scraped docs>` to confirm it no longer
//!    shows up as missing
//!
//! Display strings must never collide with a key of any table: the
//! translators rely on already-translated text passing through untouched.

use super::Category;

/// Static table for a category.
pub fn table_for(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::TransportMode => TRANSPORT_MODE,
        Category::EventType => EVENT_TYPE,
        Category::OccupantRole => OCCUPANT_ROLE,
        Category::SemanticTime => SEMANTIC_TIME,
        Category::VenueSignificance => VENUE_SIGNIFICANCE,
        Category::VenueType => VENUE_TYPE,
        Category::UserContextUpdateCriteria => USER_CONTEXT_UPDATE_CRITERIA,
        Category::SegmentCategory => SEGMENT_CATEGORY,
        Category::SegmentSubcategory => SEGMENT_SUBCATEGORY,
        Category::SegmentType => SEGMENT_TYPE,
        Category::HarshDrivingEventType => HARSH_DRIVING_EVENT_TYPE,
        Category::DetectionStatus => DETECTION_STATUS,
        Category::LocationPermission => LOCATION_PERMISSION,
    }
}

// ─── Transport and timeline ─────────────────────────────────────────

const TRANSPORT_MODE: &[(&str, &str)] = &[
    ("UNKNOWN", "Desconocido"),
    ("CAR", "Coche"),
    ("BICYCLE", "Bicicleta"),
    ("WALKING", "Caminando"),
    ("RUNNING", "Corriendo"),
    ("TRAM", "Tranvía / Subterráneo"),
    ("TRAIN", "Tren"),
    ("BUS", "Autobús / Colectivo"),
    ("MOTORCYCLE", "Motocicleta"),
    // Walking or running depending on context
    ("ON_FOOT", "A pie"),
    ("PLANE", "Avión"),
    ("BOAT", "Barco"),
    // Reported identically to TRAM in field tests
    ("METRO", "Metro / Subterráneo"),
];

const EVENT_TYPE: &[(&str, &str)] = &[
    ("UNKNOWN", "Desconocido"),
    ("STATIONARY", "Estacionario"),
    ("OFF_THE_GRID", "Fuera de cobertura"),
    ("IN_TRANSPORT", "En transporte"),
];

const OCCUPANT_ROLE: &[(&str, &str)] = &[
    ("DRIVER", "Conductor"),
    ("PASSENGER", "Pasajero"),
    ("UNAVAILABLE", "No disponible"),
];

const SEMANTIC_TIME: &[(&str, &str)] = &[
    ("UNKNOWN", "Desconocido"),
    ("MORNING", "Mañana"),
    ("LATE_MORNING", "Media mañana"),
    ("LUNCH", "Almuerzo"),
    ("AFTERNOON", "Tarde"),
    ("EARLY_EVENING", "Atardecer"),
    ("EVENING", "Noche"),
    ("NIGHT", "Madrugada"),
];

// ─── Venues ─────────────────────────────────────────────────────────

const VENUE_SIGNIFICANCE: &[(&str, &str)] = &[
    ("UNKNOWN", "Desconocido"),
    ("HOME", "Casa"),
    ("WORK", "Trabajo"),
    ("POINT_OF_INTEREST", "Punto de interés"),
];

const VENUE_TYPE: &[(&str, &str)] = &[
    ("UNKNOWN", "Desconocido"),
    ("DRINK_DAY", "Cafetería / Bar (día)"),
    ("DRINK_EVENING", "Bar / Pub (noche)"),
    ("EDUCATION_INDEPENDENT", "Educación (estudiante)"),
    ("EDUCATION_PARENTS", "Educación (padres)"),
    ("HEALTH", "Centro de salud"),
    ("INDUSTRIAL", "Zona industrial"),
    ("LEISURE_BEACH", "Playa / Resort"),
    ("LEISURE_DAY", "Ocio (día)"),
    ("LEISURE_EVENING", "Ocio (noche)"),
    ("LEISURE_MUSEUM", "Museo"),
    ("LEISURE_NATURE", "Naturaleza / Parque nacional"),
    ("LEISURE_PARK", "Parque / Jardín"),
    ("OFFICE", "Oficina"),
    ("RELIGION", "Lugar religioso"),
    ("RESIDENTIAL", "Residencial"),
    ("RESTO_MID", "Restaurante"),
    ("RESTO_SHORT", "Comida rápida"),
    ("SHOP_LONG", "Centro comercial / Supermercado"),
    ("SHOP_SHORT", "Tienda pequeña"),
    ("SPORT", "Gimnasio / Centro deportivo"),
    ("SPORT_ATTEND", "Estadio / Evento deportivo"),
    ("TRAVEL_BUS", "Terminal de autobuses"),
    ("TRAVEL_CONFERENCE", "Centro de conferencias"),
    ("TRAVEL_FILL", "Gasolinera"),
    ("TRAVEL_HOTEL", "Hotel"),
    ("TRAVEL_LONG", "Aeropuerto"),
    ("TRAVEL_SHORT", "Estación de tren/metro"),
];

// ─── User context and segments ──────────────────────────────────────

const USER_CONTEXT_UPDATE_CRITERIA: &[(&str, &str)] = &[
    ("CURRENT_EVENT", "Evento actual"),
    ("ACTIVE_SEGMENTS", "Segmentos activos"),
    ("VISITED_VENUES", "Lugares visitados"),
];

const SEGMENT_CATEGORY: &[(&str, &str)] = &[
    ("LEISURE", "Ocio"),
    ("MOBILITY", "Movilidad"),
    ("WORK_LIFE", "Vida laboral"),
];

const SEGMENT_SUBCATEGORY: &[(&str, &str)] = &[
    ("COMMUTE", "Desplazamiento al trabajo"),
    ("DRIVING", "Conducción"),
    ("ENTERTAINMENT", "Entretenimiento"),
    ("FAMILY", "Familia"),
    ("HOME", "Hogar"),
    ("SHOPPING", "Compras"),
    ("SOCIAL", "Social"),
    ("TRANSPORT", "Transporte"),
    ("TRAVEL", "Viajes"),
    ("WELLBEING", "Bienestar"),
    ("WINING_AND_DINING", "Gastronomía"),
    ("WORK", "Trabajo"),
];

const SEGMENT_TYPE: &[(&str, &str)] = &[
    ("PHYSICAL_ACTIVITY__HIGH", "Actividad física alta"),
    ("PHYSICAL_ACTIVITY__LIMITED", "Actividad física limitada"),
    ("PHYSICAL_ACTIVITY__MODERATE", "Actividad física moderada"),
    ("MOBILITY__HIGH", "Movilidad alta"),
    ("MOBILITY__LIMITED", "Movilidad limitada"),
    ("MOBILITY__MODERATE", "Movilidad moderada"),
    ("SOCIAL_ACTIVITY", "Actividad social"),
    ("SOCIAL_ACTIVITY__HIGH", "Actividad social alta"),
    ("SOCIAL_ACTIVITY__LIMITED", "Actividad social limitada"),
    ("SOCIAL_ACTIVITY__MODERATE", "Actividad social moderada"),
    ("BAR_GOER", "Asiduo concurrente a bares"),
    ("FOODIE", "Amante de la comida"),
    ("HEALTHY_BIKER", "Ciclista saludable"),
    ("DIE_HARD_DRIVER", "Conductor empedernido"),
    ("EARLY_BIRD", "Madrugador"),
    ("EASY_COMMUTER", "Viajero tranquilo"),
    ("FREQUENT_FLYER", "Viajero frecuente"),
    ("FULLTIME_WORKER", "Trabajador a tiempo completo"),
    ("GREEN_COMMUTER", "Viajero ecológico"),
    ("HEALTHY_WALKER", "Caminante saludable"),
    ("HEAVY_COMMUTER", "Viajero intensivo"),
    ("HOME_BOUND", "Vinculado al hogar"),
    ("HOMEBODY", "Hogareño"),
    ("HOMEWORKER", "Teletrabajador"),
    ("LATE_WORKER", "Trabajador nocturno"),
    ("LONG_COMMUTER", "Viajero de larga distancia"),
    ("NATURE_LOVER", "Amante de la naturaleza"),
    ("NIGHT_OWL", "Ave nocturna"),
    ("NIGHTWORKER", "Trabajador de noche"),
    ("NORMAL_COMMUTER", "Viajero normal"),
    ("PARTTIME_WORKER", "Trabajador a tiempo parcial"),
    ("PUBLIC_TRANSPORTS_COMMUTER", "Usuario de transporte público (trabajo)"),
    ("PUBLIC_TRANSPORTS_USER", "Usuario de transporte público"),
    ("RESTO_LOVER", "Amante de restaurantes"),
    ("SHOPAHOLIC", "Comprador compulsivo"),
    ("SHORT_COMMUTER", "Viajero de corta distancia"),
    ("SLEEP_DEPRIVED", "Con falta de sueño"),
    ("SPORTIVE", "Deportista"),
    ("STUDENT", "Estudiante"),
    ("UBER_PARENT", "Super padre/madre"),
    ("WORK_LIFE_BALANCE", "Equilibrio trabajo-vida"),
    ("WORK_TRAVELLER", "Viajero de negocios"),
    ("WORKAHOLIC", "Adicto al trabajo"),
    ("AGGRESSIVE_DRIVER", "Conductor agresivo"),
    ("ANTICIPATIVE_DRIVER", "Conductor anticipativo"),
    ("CITY_DRIVER", "Conductor urbano"),
    ("DISTRACTED_DRIVER", "Conductor distraído"),
    ("EFFICIENT_DRIVER", "Conductor eficiente"),
    ("ILLEGAL_DRIVER", "Conductor fuera de norma"),
    ("LEGAL_DRIVER", "Conductor respetuoso"),
    ("MOTORWAY_DRIVER", "Conductor de autopista"),
    ("CITY_HOME", "Residente urbano"),
    ("CITY_WORKER", "Trabajador urbano"),
    ("RURAL_HOME", "Residente rural"),
    ("RURAL_WORKER", "Trabajador rural"),
    ("TOWN_HOME", "Residente de pueblo"),
    ("TOWN_WORKER", "Trabajador de pueblo"),
    ("RECENTLY_CHANGED_JOB", "Cambio de trabajo reciente"),
    ("RECENTLY_MOVED_HOME", "Mudanza reciente"),
    ("CULTURE_BUFF", "Amante de la cultura"),
    ("DOG_WALKER", "Paseador de perros"),
    ("MUSIC_LOVER", "Amante de la música"),
    ("PET_OWNER", "Dueño de mascota"),
];

// ─── Driving and SDK status ─────────────────────────────────────────

const HARSH_DRIVING_EVENT_TYPE: &[(&str, &str)] = &[
    ("ACCELERATION", "Aceleración brusca"),
    ("BRAKING", "Frenada brusca"),
    ("TURN", "Giro brusco"),
];

const DETECTION_STATUS: &[(&str, &str)] = &[
    ("ENABLED_AND_DETECTING", "Activado y detectando"),
    ("ENABLED_BUT_BLOCKED", "Activado pero bloqueado"),
    ("DISABLED", "Desactivado"),
    ("INITIALIZED", "Inicializado"),
    ("NOT_INITIALIZED", "No inicializado"),
    ("RESETTING", "Reiniciando"),
    ("UNRECOGNIZED_STATE", "Estado no reconocido"),
];

const LOCATION_PERMISSION: &[(&str, &str)] = &[
    ("ALWAYS", "Siempre"),
    ("ONLY_WHILE_IN_USE", "Solo con la app en uso"),
    ("DENIED", "Denegado"),
    ("RESTRICTED", "Restringido"),
    ("NEVER", "Nunca"),
    ("AVAILABLE", "Disponible"),
];
