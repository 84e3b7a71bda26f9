//! Hard-coded in-memory data. The dashboard has no network layer and no
//! persistence; everything the views show comes from these constructors.

use chrono::{Duration, NaiveDate, Utc};

use crate::model::{
    Achievement, Ballot, Candidate, Election, ElectionStatus, FacilitySlot, Gender, Student,
    StudentEvent, StudentRole, VotePoint, Voter, WeeklyRate,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

fn ballots(n: usize) -> Vec<Ballot> {
    vec![Ballot; n]
}

/// The student directory.
pub fn seed_students() -> Vec<Student> {
    vec![
        Student {
            id: "1".into(),
            name: "John Smith".into(),
            email: "john.smith@example.com".into(),
            profile: None,
            blood_group: Some("O+".into()),
            dob: Some(date(2000, 5, 15)),
            gender: Gender::Male,
            role: Some(StudentRole::MaleClassRepresentative),
            class_name: Some("12A".into()),
            department: "Science".into(),
            hobbies: vec!["Reading".into(), "Chess".into(), "Swimming".into()],
            achievements: vec![Achievement {
                name: "First Place - Science Fair 2023".into(),
                certificate_file: "/certificates/science-fair-2023.pdf".into(),
            }],
            events: vec![StudentEvent {
                name: "Annual Science Exhibition".into(),
                description: Some("Presented research on renewable energy".into()),
                timeline: date(2023, 11, 20).and_hms_opt(14, 0, 0).expect("valid time").and_utc(),
            }],
            facility_slots: vec![FacilitySlot {
                facility: "Library".into(),
                time: "14:00-16:00".into(),
                day: "Monday".into(),
            }],
            parent_name: "Michael Smith".into(),
            parent_mobile: "+1234567890".into(),
            parent_email: "michael.smith@example.com".into(),
            institution: "Springfield High School".into(),
            is_active: true,
            is_present: true,
        },
        Student {
            id: "2".into(),
            name: "Alice Johnson".into(),
            email: "alice.johnson@example.com".into(),
            profile: None,
            blood_group: Some("A-".into()),
            dob: Some(date(2001, 7, 20)),
            gender: Gender::Female,
            role: Some(StudentRole::FemaleClassRepresentative),
            class_name: Some("12B".into()),
            department: "Arts".into(),
            hobbies: vec!["Dancing".into(), "Singing".into(), "Drawing".into()],
            achievements: vec![Achievement {
                name: "Winner - Art Competition 2023".into(),
                certificate_file: "/certificates/art-competition-2023.pdf".into(),
            }],
            events: vec![StudentEvent {
                name: "Drama Festival".into(),
                description: Some("Performed in the school play".into()),
                timeline: date(2023, 10, 15).and_hms_opt(16, 0, 0).expect("valid time").and_utc(),
            }],
            facility_slots: vec![FacilitySlot {
                facility: "Auditorium".into(),
                time: "10:00-12:00".into(),
                day: "Wednesday".into(),
            }],
            parent_name: "Karen Johnson".into(),
            parent_mobile: "+1987654321".into(),
            parent_email: "karen.johnson@example.com".into(),
            institution: "Springfield High School".into(),
            is_active: true,
            is_present: false,
        },
        Student {
            id: "3".into(),
            name: "Robert Brown".into(),
            email: "robert.brown@example.com".into(),
            profile: None,
            blood_group: Some("B+".into()),
            dob: Some(date(1999, 11, 30)),
            gender: Gender::Male,
            role: Some(StudentRole::MaleClassRepresentative),
            class_name: Some("12C".into()),
            department: "Physical Education".into(),
            hobbies: vec!["Football".into(), "Gaming".into()],
            achievements: vec![Achievement {
                name: "Runner-up - Math Olympiad 2023".into(),
                certificate_file: "/certificates/math-olympiad-2023.pdf".into(),
            }],
            events: vec![StudentEvent {
                name: "Sports Day".into(),
                description: Some("Participated in the relay race".into()),
                timeline: date(2023, 9, 25).and_hms_opt(9, 0, 0).expect("valid time").and_utc(),
            }],
            facility_slots: vec![FacilitySlot {
                facility: "Gymnasium".into(),
                time: "08:00-10:00".into(),
                day: "Friday".into(),
            }],
            parent_name: "Sarah Brown".into(),
            parent_mobile: "+1123456789".into(),
            parent_email: "sarah.brown@example.com".into(),
            institution: "Springfield High School".into(),
            is_active: false,
            is_present: true,
        },
    ]
}

/// All elections shown in the portal, newest first.
pub fn seed_elections() -> Vec<Election> {
    vec![
        Election {
            id: "1".into(),
            title: "Student Council President Election 2024".into(),
            description: Some("Vote for your next student council president".into()),
            status: ElectionStatus::Ongoing,
            start: date(2024, 2, 1),
            end: date(2024, 2, 15),
            candidates: vec![
                Candidate {
                    id: "c1".into(),
                    name: "Alice Johnson".into(),
                    avatar: Some("/uploads/alice-johnson.png".into()),
                    position: "President".into(),
                    manifesto: Some("Building a better future together".into()),
                    votes: ballots(340),
                    vote_history: Some(vec![
                        VotePoint { date: date(2024, 2, 1), count: 100 },
                        VotePoint { date: date(2024, 2, 2), count: 200 },
                        VotePoint { date: date(2024, 2, 3), count: 300 },
                    ]),
                },
                Candidate {
                    id: "c2".into(),
                    name: "Bob Smith".into(),
                    avatar: None,
                    position: "President".into(),
                    manifesto: Some("Innovation and progress".into()),
                    votes: ballots(2200),
                    vote_history: Some(vec![
                        VotePoint { date: date(2024, 2, 1), count: 80 },
                        VotePoint { date: date(2024, 2, 2), count: 180 },
                        VotePoint { date: date(2024, 2, 3), count: 280 },
                    ]),
                },
                Candidate {
                    id: "c3".into(),
                    name: "Carol Williams".into(),
                    avatar: None,
                    position: "President".into(),
                    manifesto: Some("Empowering student voices".into()),
                    votes: ballots(180),
                    vote_history: Some(vec![
                        VotePoint { date: date(2024, 2, 1), count: 50 },
                        VotePoint { date: date(2024, 2, 2), count: 120 },
                        VotePoint { date: date(2024, 2, 3), count: 180 },
                    ]),
                },
            ],
        },
        Election {
            id: "2".into(),
            title: "Class Representative Elections".into(),
            description: Some("Register now to represent your class".into()),
            status: ElectionStatus::Registration,
            start: date(2024, 2, 20),
            end: date(2024, 3, 5),
            candidates: vec![
                Candidate {
                    id: "c4".into(),
                    name: "David Chen".into(),
                    avatar: None,
                    position: "Class Rep".into(),
                    manifesto: Some("Bringing our class together".into()),
                    votes: Vec::new(),
                    vote_history: None,
                },
                Candidate {
                    id: "c5".into(),
                    name: "Emma Davis".into(),
                    avatar: None,
                    position: "Class Rep".into(),
                    manifesto: Some("Your voice matters".into()),
                    votes: Vec::new(),
                    vote_history: None,
                },
            ],
        },
        Election {
            id: "3".into(),
            title: "Sports Committee Selection".into(),
            description: Some("Previous term election results".into()),
            status: ElectionStatus::Completed,
            start: date(2024, 1, 1),
            end: date(2024, 1, 15),
            candidates: vec![
                Candidate {
                    id: "c6".into(),
                    name: "Frank Wilson".into(),
                    avatar: None,
                    position: "Sports Captain".into(),
                    manifesto: Some("Champions in making".into()),
                    votes: ballots(270),
                    vote_history: None,
                },
                Candidate {
                    id: "c7".into(),
                    name: "Grace Lee".into(),
                    avatar: None,
                    position: "Sports Captain".into(),
                    manifesto: Some("Fitness for all".into()),
                    votes: ballots(255),
                    vote_history: None,
                },
            ],
        },
    ]
}

/// Voters who cast a ballot recently, spread over the last hour.
pub fn seed_voters() -> Vec<Voter> {
    let now = Utc::now();
    let mut voters = vec![
        Voter {
            id: "v1".into(),
            name: "David Chen".into(),
            avatar: None,
            timestamp: now - Duration::minutes(42),
        },
        Voter {
            id: "v2".into(),
            name: "Emma Davis".into(),
            avatar: None,
            timestamp: now - Duration::minutes(7),
        },
        Voter {
            id: "v3".into(),
            name: "Frank Wilson".into(),
            avatar: None,
            timestamp: now - Duration::minutes(19),
        },
    ];
    crate::model::sort_newest_first(&mut voters);
    voters
}

/// Attendance rate per weekday for the statistics panel.
pub fn weekly_trend() -> Vec<WeeklyRate> {
    [("Mon", 92.0), ("Tue", 88.0), ("Wed", 95.0), ("Thu", 90.0), ("Fri", 85.0)]
        .into_iter()
        .map(|(day, rate)| WeeklyRate { day: day.into(), rate })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_vote_histories_are_consistent() {
        for election in seed_elections() {
            for candidate in &election.candidates {
                assert!(
                    candidate.history_is_consistent(),
                    "inconsistent history for {}",
                    candidate.id
                );
            }
        }
    }

    #[test]
    fn seed_voters_are_newest_first() {
        let voters = seed_voters();
        assert!(voters.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn ongoing_election_has_three_candidates() {
        let elections = seed_elections();
        assert_eq!(elections[0].status, ElectionStatus::Ongoing);
        assert_eq!(elections[0].candidates.len(), 3);
        let counts: Vec<usize> =
            elections[0].candidates.iter().map(|c| c.vote_count()).collect();
        assert_eq!(counts, [340, 2200, 180]);
    }
}
