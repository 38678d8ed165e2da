use cinotes::notestore::BoxedNoteStore;
use cinotes::InMemoryStore;

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    /// Reject every note submission and deletion.
    pub readonly: bool,
    pub otlpendpoint: Option<String>,
}

impl Settings {
    pub fn get_note_store(&self) -> BoxedNoteStore {
        if self.readonly {
            Box::new(InMemoryStore::read_only())
        } else {
            Box::new(InMemoryStore::new())
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

lazy_static! {
    pub static ref CONFIGURATION: Settings =
        get_configuration().expect("Failed to read configuration.yml.");
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let config = config::Config::builder()
        .set_default("debug", false)?
        .set_default("host", "localhost")?
        .set_default("port", 8000)?
        .set_default("readonly", false)?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::default()
                .prefix("cinotes")
                .separator("_"),
        )
        .build()?;
    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = get_configuration().unwrap();
        assert_eq!(settings.address(), format!("{}:{}", settings.host, settings.port));
        let store = Settings {
            readonly: true,
            ..settings
        }
        .get_note_store();
        assert!(store.is_read_only());
    }
}
