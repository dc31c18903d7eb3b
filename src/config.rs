use std::env;

/// Which storage backend the services are bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Mongo,
    Memory,
}

impl StorageKind {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Some(StorageKind::Mongo),
            "memory" | "mem" => Some(StorageKind::Memory),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub mongodb_uri: String,
    pub mongodb_db: String,
    pub host: String,
    pub port: u16,

    pub storage: StorageKind,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let mongodb_uri = env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

    let mongodb_db = env::var("MONGODB_DB")
        .unwrap_or_else(|_| "pedidos".to_string());

    let host = env::var("HOST")
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let storage = match env::var("STORAGE") {
        Ok(raw) => StorageKind::parse(&raw).unwrap_or_else(|| {
            tracing::warn!(value = %raw, "unknown STORAGE value, falling back to mongo");
            StorageKind::Mongo
        }),
        Err(_) => StorageKind::Mongo,
    };

    Settings {
        mongodb_uri,
        mongodb_db,
        host,
        port,
        storage,
    }
}

#[cfg(test)]
mod tests {
    use super::StorageKind;

    #[test]
    fn storage_kind_accepts_aliases() {
        assert_eq!(StorageKind::parse("Mongo"), Some(StorageKind::Mongo));
        assert_eq!(StorageKind::parse(" memory "), Some(StorageKind::Memory));
        assert_eq!(StorageKind::parse("mem"), Some(StorageKind::Memory));
        assert_eq!(StorageKind::parse("postgres"), None);
    }
}
