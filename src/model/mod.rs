//! Core data records for the dashboard.
//!
//! All records are read-only snapshots supplied by the `data` module.
//! Nothing in the engine mutates vote counts: the election code only
//! ranks and animates the counts it is given.

use chrono::{DateTime, NaiveDate, Utc};

// ── Students ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentRole {
    MaleClassRepresentative,
    FemaleClassRepresentative,
}

impl StudentRole {
    pub fn label(self) -> &'static str {
        match self {
            StudentRole::MaleClassRepresentative => "Male Class Representative",
            StudentRole::FemaleClassRepresentative => "Female Class Representative",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Achievement {
    pub name: String,
    pub certificate_file: String,
}

#[derive(Debug, Clone)]
pub struct StudentEvent {
    pub name: String,
    pub description: Option<String>,
    pub timeline: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FacilitySlot {
    pub facility: String,
    pub time: String,
    pub day: String,
}

#[derive(Debug, Clone)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Profile image URL. No image pipeline exists; views fall back to
    /// the student's initials.
    pub profile: Option<String>,
    pub blood_group: Option<String>,
    pub dob: Option<NaiveDate>,
    pub gender: Gender,
    pub role: Option<StudentRole>,
    pub class_name: Option<String>,
    pub department: String,
    pub hobbies: Vec<String>,
    pub achievements: Vec<Achievement>,
    pub events: Vec<StudentEvent>,
    pub facility_slots: Vec<FacilitySlot>,
    pub parent_name: String,
    pub parent_mobile: String,
    pub parent_email: String,
    pub institution: String,
    pub is_active: bool,
    pub is_present: bool,
}

/// One point of the attendance weekly trend: a day label and the
/// attendance rate in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyRate {
    pub day: String,
    pub rate: f32,
}

// ── Elections ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElectionStatus {
    Hidden,
    Registration,
    Ongoing,
    Completed,
}

impl ElectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            ElectionStatus::Hidden => "Hidden",
            ElectionStatus::Registration => "Registration",
            ElectionStatus::Ongoing => "Ongoing",
            ElectionStatus::Completed => "Completed",
        }
    }
}

/// A single anonymous ballot. Ballots carry no voter identity; the
/// portal only ever counts them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ballot;

/// One sample of a candidate's running total, taken once per day while
/// an election is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VotePoint {
    pub date: NaiveDate,
    pub count: u32,
}

#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    /// Running-position label ("President", "Class Rep", ...).
    pub position: String,
    pub manifesto: Option<String>,
    pub votes: Vec<Ballot>,
    /// Daily running totals, oldest first. Counts never decrease along
    /// the sequence.
    pub vote_history: Option<Vec<VotePoint>>,
}

impl Candidate {
    /// Total votes cast for this candidate.
    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }

    /// Whether the vote history (if any) is non-decreasing in date
    /// order.
    pub fn history_is_consistent(&self) -> bool {
        let Some(history) = &self.vote_history else {
            return true;
        };
        history.windows(2).all(|w| w[0].count <= w[1].count && w[0].date <= w[1].date)
    }
}

#[derive(Debug, Clone)]
pub struct Election {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: ElectionStatus,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub candidates: Vec<Candidate>,
}

// ── Voters ──

/// A voter who has cast a ballot in the selected election. Immutable
/// once created; lists are shown newest-first.
#[derive(Debug, Clone)]
pub struct Voter {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Order voters newest-first for display.
pub fn sort_newest_first(voters: &mut [Voter]) {
    voters.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn candidate(history: Option<Vec<VotePoint>>) -> Candidate {
        Candidate {
            id: "c1".into(),
            name: "Test".into(),
            avatar: None,
            position: "President".into(),
            manifesto: None,
            votes: vec![Ballot; 3],
            vote_history: history,
        }
    }

    #[test]
    fn vote_count_is_ballot_collection_size() {
        assert_eq!(candidate(None).vote_count(), 3);
    }

    #[test]
    fn missing_history_is_consistent() {
        assert!(candidate(None).history_is_consistent());
    }

    #[test]
    fn decreasing_history_is_flagged() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
        let good = candidate(Some(vec![
            VotePoint { date: d(1), count: 10 },
            VotePoint { date: d(2), count: 10 },
            VotePoint { date: d(3), count: 25 },
        ]));
        assert!(good.history_is_consistent());

        let bad = candidate(Some(vec![
            VotePoint { date: d(1), count: 10 },
            VotePoint { date: d(2), count: 5 },
        ]));
        assert!(!bad.history_is_consistent());
    }

    #[test]
    fn voters_sort_newest_first() {
        let at = |h| Utc.with_ymd_and_hms(2024, 2, 10, h, 0, 0).unwrap();
        let mut voters = vec![
            Voter { id: "v1".into(), name: "A".into(), avatar: None, timestamp: at(8) },
            Voter { id: "v2".into(), name: "B".into(), avatar: None, timestamp: at(12) },
            Voter { id: "v3".into(), name: "C".into(), avatar: None, timestamp: at(10) },
        ];
        sort_newest_first(&mut voters);
        let ids: Vec<&str> = voters.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["v2", "v3", "v1"]);
    }
}
