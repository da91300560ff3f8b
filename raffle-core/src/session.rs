use crate::config::RaffleConfig;
use crate::draw::pick_winner;
use crate::error::{RaffleError, Result};
use crate::name;
use crate::storage::{DeadlineFile, RegistrantLog, Storage};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeSet;

/// Remaining window and registrant count, shown before each prompt.
#[derive(Debug, Clone)]
pub struct SessionStatus {
    /// `None` once the deadline has passed.
    pub remaining: Option<Duration>,
    pub registered: usize,
}

/// Result of the winner-selection step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Enough participants: one was drawn and recorded. Terminal.
    Winner { name: String, total: usize },
    /// Too few participants; the window was extended once. Registration
    /// reopens until `until`.
    Extended { until: DateTime<Utc> },
    /// Still too few after the extension. Terminal.
    NoWinner { total: usize },
}

/// One raffle run: the registrant set, the deadline and the persistence
/// handles, owned by the driver for the lifetime of the process.
pub struct RaffleSession {
    config: RaffleConfig,
    registrants: BTreeSet<String>,
    deadline: DateTime<Utc>,
    last_autosave: DateTime<Utc>,
    extended: bool,
    deadline_file: DeadlineFile,
    log: RegistrantLog,
}

impl RaffleSession {
    /// Load persisted state, falling back to an empty set and a fresh
    /// `now + registration_duration` deadline.
    pub async fn open(storage: &Storage, config: RaffleConfig, now: DateTime<Utc>) -> Result<Self> {
        let deadline_file = storage.deadline_file(&config);
        let log = storage.registrant_log(&config);

        let deadline = deadline_file
            .load_or_default(now, config.registration_duration())
            .await;
        let registrants = log.load().await?;

        tracing::info!(
            "Session opened with {} registrants, deadline {}",
            registrants.len(),
            deadline
        );

        Ok(Self {
            config,
            registrants,
            deadline,
            last_autosave: now,
            extended: false,
            deadline_file,
            log,
        })
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    pub fn registered(&self) -> usize {
        self.registrants.len()
    }

    pub fn registrants(&self) -> &BTreeSet<String> {
        &self.registrants
    }

    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        now < self.deadline
    }

    pub fn status(&self, now: DateTime<Utc>) -> SessionStatus {
        let remaining = self.deadline - now;
        SessionStatus {
            remaining: (remaining > Duration::zero()).then_some(remaining),
            registered: self.registrants.len(),
        }
    }

    /// Validate, canonicalize and record one name, returning the canonical
    /// form. The deadline file is saved on every acceptance; the registrant
    /// log only when the autosave interval has elapsed.
    pub async fn register(&mut self, raw: &str, now: DateTime<Utc>) -> Result<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RaffleError::EmptyName);
        }
        if !name::is_valid_name(trimmed) {
            return Err(RaffleError::InvalidName(trimmed.to_string()));
        }

        let canonical = name::canonicalize(trimmed);
        if self.registrants.contains(&canonical) {
            return Err(RaffleError::AlreadyRegistered(canonical));
        }

        self.registrants.insert(canonical.clone());
        tracing::info!("Registered '{}'", canonical);

        if now - self.last_autosave >= self.config.autosave_interval() {
            self.autosave(now).await?;
        }
        self.deadline_file.save(self.deadline).await?;

        Ok(canonical)
    }

    async fn autosave(&mut self, now: DateTime<Utc>) -> Result<()> {
        self.log.rewrite(&self.registrants).await?;
        self.last_autosave = now;
        tracing::debug!("Autosaved {} registrants", self.registrants.len());
        Ok(())
    }

    /// Persist everything. Used at shutdown and on interrupt.
    pub async fn save(&mut self, now: DateTime<Utc>) -> Result<()> {
        self.autosave(now).await?;
        self.deadline_file.save(self.deadline).await
    }

    /// The winner-selection step, called once the deadline has passed. On
    /// an `Extended` outcome the caller reopens registration and calls
    /// this again after the new deadline expires; the extension is granted
    /// at most once.
    pub async fn conclude(&mut self, now: DateTime<Utc>) -> Result<DrawOutcome> {
        let total = self.registrants.len();

        if total >= self.config.min_participants {
            let winner = pick_winner(&self.registrants)
                .ok_or(RaffleError::NoParticipants)?
                .to_string();

            // Flush the set before the terminal record so late
            // registrations that missed an autosave are not lost.
            self.autosave(now).await?;
            self.log.append_winner(&winner).await?;
            self.deadline_file.clear().await?;

            tracing::info!("Winner drawn: '{}' out of {}", winner, total);
            Ok(DrawOutcome::Winner {
                name: winner,
                total,
            })
        } else if !self.extended {
            self.extended = true;
            self.deadline = self.deadline + self.config.extension_duration();
            self.deadline_file.save(self.deadline).await?;

            tracing::info!(
                "Only {} of {} required registrants; extended until {}",
                total,
                self.config.min_participants,
                self.deadline
            );
            Ok(DrawOutcome::Extended {
                until: self.deadline,
            })
        } else {
            self.autosave(now).await?;
            self.log.append_no_winner().await?;

            tracing::info!("Still only {} registrants after extension; no winner", total);
            Ok(DrawOutcome::NoWinner { total })
        }
    }
}
