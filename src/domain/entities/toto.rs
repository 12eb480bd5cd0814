//! Toto entity.
//!
//! Maps to the `totos` table:
//! - id: BIGSERIAL PRIMARY KEY
//! - name: VARCHAR(255) NOT NULL

use serde::{Deserialize, Serialize};

use crate::domain::gateway::Resource;

/// A persisted toto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Toto {
    pub id: i64,
    pub name: String,
}

/// Toto data without an identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TotoDraft {
    pub name: String,
}

impl TotoDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Resource for Toto {
    type Draft = TotoDraft;

    const NAME: &'static str = "Toto";

    fn id(&self) -> i64 {
        self.id
    }

    fn assemble(id: i64, draft: TotoDraft) -> Self {
        Self {
            id,
            name: draft.name,
        }
    }

    fn overwrite(&mut self, draft: TotoDraft) {
        self.name = draft.name;
    }
}
