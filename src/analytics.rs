use std::collections::HashMap;

use chrono::{DateTime, Duration, Local, NaiveTime, Utc};

use crate::domain::signup::SignupRecord;

/// Derived counters over the signup list. A pure projection, recomputed on
/// demand and never persisted.
#[derive(Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupStats {
    pub total: usize,
    pub today: usize,
    pub this_week: usize,
    pub sources: HashMap<String, usize>,
}

/// Buckets the signup list into totals, per-source counts and two time
/// windows: the current local calendar day and the trailing 7x24h window
/// ending at `now`. `now` is an explicit input so callers control the clock.
pub fn aggregate_signups(signups: &[SignupRecord], now: DateTime<Local>) -> SignupStats {
    let day_start = now.date_naive().and_time(NaiveTime::MIN);
    let week_start: DateTime<Utc> = (now - Duration::days(7)).with_timezone(&Utc);

    let mut today = 0;
    let mut this_week = 0;
    let mut sources: HashMap<String, usize> = HashMap::new();

    for signup in signups {
        let signed_up_at = signup.timestamp.with_timezone(&Local);

        if signed_up_at.naive_local() >= day_start {
            today += 1;
        }
        if signup.timestamp >= week_start {
            this_week += 1;
        }

        *sources.entry(signup.source.clone()).or_insert(0) += 1;
    }

    SignupStats {
        total: signups.len(),
        today,
        this_week,
        sources,
    }
}
