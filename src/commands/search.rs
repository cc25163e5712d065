//! # Search Command
//!
//! Finds tasks whose description contains a keyword (ASCII case-insensitive).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{session::Session, ui};

/// Arguments for the search command
pub struct SearchArgs {
    pub keyword: String,
}

/// Executes the search command.
pub fn execute(session: &Session, args: &SearchArgs) -> Result<()> {
    let mut hits = session.calendar().search_tasks(&args.keyword)?.peekable();

    if hits.peek().is_none() {
        anyhow::bail!("No tasks found containing \"{}\"", args.keyword);
    }

    println!("Search results for \"{}\":", args.keyword);
    for hit in hits {
        println!("{}", ui::render_search_hit(&hit));
    }

    Ok(())
}
