use sonic_core::{MediaSink, PlayTicket, PlaybackError};

/// Media sink for headless runs: nothing is decoded, every call is logged.
#[derive(Debug, Default)]
pub struct LogSink {
    source: Option<String>,
    volume: f32,
    started: Vec<PlayTicket>,
}

impl LogSink {
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Start requests issued so far, oldest first.
    pub fn started(&self) -> &[PlayTicket] {
        &self.started
    }
}

impl MediaSink for LogSink {
    fn set_source(&mut self, url: &str) {
        log::debug!("[sink] source {}", url);
        self.source = Some(url.to_owned());
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn play(&mut self, ticket: &PlayTicket) -> Result<(), PlaybackError> {
        let Some(src) = self.source.as_deref() else {
            return Err(PlaybackError::Source("no source set".into()));
        };
        log::info!(
            "[sink] play {} (gen {}) from {} at volume {:.2}",
            ticket.id,
            ticket.generation,
            src,
            self.volume
        );
        self.started.push(ticket.clone());
        Ok(())
    }

    fn pause(&mut self) {
        log::info!("[sink] pause");
    }
}
