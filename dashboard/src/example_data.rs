//! Deterministic demo records.
//!
//! Seeds the store the dump binary and integration tests run against.
//! Identities are fixed and the append order never changes, so two seeded
//! stores are always identical.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::records::{Candidate, CandidateStatus, Client, Closure, Record, Recruiter};
use crate::domain::{
    Email, EmailValidationError, RecordStore, ScaledDecimal, ScaledDecimalValidationError,
};

/// Errors raised while building the seed records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// A seed email address failed validation.
    #[error(transparent)]
    Email(#[from] EmailValidationError),
    /// A seed money value failed validation.
    #[error(transparent)]
    Decimal(#[from] ScaledDecimalValidationError),
    /// A seed date was not a real calendar date.
    #[error("invalid calendar date in seed data")]
    Date,
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, SeedError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(SeedError::Date)
}

fn arpu(value: &str) -> Result<ScaledDecimal, SeedError> {
    Ok(ScaledDecimal::parse(value, 2)?)
}

struct CandidateSeed<'a> {
    id: u128,
    name: &'a str,
    email: &'a str,
    status: CandidateStatus,
    client: &'a str,
    joined: Option<(i32, u32, u32)>,
    salary: Option<u32>,
    recruiter: &'a str,
    team_lead: &'a str,
    department: Option<&'a str>,
    arpu: Option<&'a str>,
}

fn candidate(seed: &CandidateSeed<'_>) -> Result<Candidate, SeedError> {
    Ok(Candidate {
        id: Uuid::from_u128(seed.id),
        full_name: seed.name.to_owned(),
        email: Email::parse(seed.email)?,
        contact_number: None,
        position: None,
        location: None,
        client: Some(seed.client.to_owned()),
        status: seed.status,
        date_of_joining: seed
            .joined
            .map(|(year, month, day)| date(year, month, day))
            .transpose()?,
        salary: seed.salary,
        recruiter_reporting: Some(seed.recruiter.to_owned()),
        team_lead_reporting: Some(seed.team_lead.to_owned()),
        manager: Some("Rajesh Iyer".to_owned()),
        arpu: seed.arpu.map(arpu).transpose()?,
        additional_info: None,
        department: seed.department.map(str::to_owned),
    })
}

fn recruiters() -> Result<Vec<Recruiter>, SeedError> {
    let rows: [(u128, &str, &str, &str, &str, (i32, u32, u32), &str, &str); 4] = [
        (
            0x1001,
            "Sarah Chen",
            "sarah.chen@headsup.example",
            "Senior Recruiter",
            "IT",
            (2022, 3, 14),
            "6.5",
            "Bangalore",
        ),
        (
            0x1002,
            "Mike Johnson",
            "mike.johnson@headsup.example",
            "Recruiter",
            "Sales",
            (2023, 1, 9),
            "3.0",
            "Mumbai",
        ),
        (
            0x1003,
            "Lisa Wong",
            "lisa.wong@headsup.example",
            "Senior Recruiter",
            "Tech",
            (2021, 11, 1),
            "7.5",
            "Pune",
        ),
        (
            0x1004,
            "David Kumar",
            "david.kumar@headsup.example",
            "Recruiter",
            "Operations",
            (2023, 6, 19),
            "2.0",
            "Delhi",
        ),
    ];
    rows.into_iter()
        .map(
            |(id, name, email, role, team, joined, experience, location)| {
                Ok(Recruiter {
                    id: Uuid::from_u128(id),
                    full_name: name.to_owned(),
                    email: Email::parse(email)?,
                    contact_number: None,
                    role: Some(role.to_owned()),
                    team: Some(team.to_owned()),
                    joining_date: Some(date(joined.0, joined.1, joined.2)?),
                    experience_years: Some(ScaledDecimal::parse(experience, 1)?),
                    location: Some(location.to_owned()),
                    notes: None,
                })
            },
        )
        .collect()
}

fn clients() -> Result<Vec<Client>, SeedError> {
    let rows: [(u128, &str, &str, &str, &str, &str, u32); 3] = [
        (
            0x2001,
            "TechCorp",
            "Anita Desai",
            "anita.desai@techcorp.example",
            "18.50",
            "Backend Engineer",
            4,
        ),
        (
            0x2002,
            "Global Inc",
            "Robert Lane",
            "robert.lane@globalinc.example",
            "12.00",
            "Sales Executive",
            3,
        ),
        (
            0x2003,
            "Startup X",
            "Maya Patel",
            "maya.patel@startupx.example",
            "9.75",
            "Full-stack Developer",
            0,
        ),
    ];
    rows.into_iter()
        .map(|(id, name, spoc, email, rate, position, positions)| {
            Ok(Client {
                id: Uuid::from_u128(id),
                client_name: name.to_owned(),
                spoc: Some(spoc.to_owned()),
                contact_email: Some(Email::parse(email)?),
                arpu: Some(arpu(rate)?),
                position: Some(position.to_owned()),
                number_of_positions: Some(positions),
                additional_information: None,
            })
        })
        .collect()
}

fn candidates() -> Result<Vec<Candidate>, SeedError> {
    let seeds = [
        CandidateSeed {
            id: 0x3001,
            name: "Priya Nair",
            email: "priya.nair@example.com",
            status: CandidateStatus::Joined,
            client: "TechCorp",
            joined: Some((2024, 11, 4)),
            salary: Some(72_000),
            recruiter: "Sarah Chen",
            team_lead: "Lisa Wong",
            department: Some("IT"),
            arpu: Some("15.00"),
        },
        CandidateSeed {
            id: 0x3002,
            name: "Omar Farouk",
            email: "omar.farouk@example.com",
            status: CandidateStatus::Interviewing,
            client: "Global Inc",
            joined: None,
            salary: None,
            recruiter: "Mike Johnson",
            team_lead: "David Kumar",
            department: Some("Sales"),
            arpu: None,
        },
        CandidateSeed {
            id: 0x3003,
            name: "Dana Petrov",
            email: "dana.petrov@example.com",
            status: CandidateStatus::Selected,
            client: "TechCorp",
            joined: Some((2024, 11, 25)),
            salary: Some(70_000),
            recruiter: "Sarah Chen",
            team_lead: "Lisa Wong",
            department: Some("IT"),
            arpu: Some("15.00"),
        },
        CandidateSeed {
            id: 0x3004,
            name: "Jonas Weber",
            email: "jonas.weber@example.com",
            status: CandidateStatus::Prospect,
            client: "Startup X",
            joined: None,
            salary: None,
            recruiter: "Lisa Wong",
            team_lead: "Lisa Wong",
            department: Some("Tech"),
            arpu: None,
        },
        CandidateSeed {
            id: 0x3005,
            name: "Ana Silva",
            email: "ana.silva@example.com",
            status: CandidateStatus::Joined,
            client: "TechCorp",
            joined: Some((2024, 10, 7)),
            salary: Some(68_000),
            recruiter: "Sarah Chen",
            team_lead: "Lisa Wong",
            department: Some("IT"),
            arpu: Some("15.00"),
        },
        CandidateSeed {
            id: 0x3006,
            name: "Ravi Shankar",
            email: "ravi.shankar@example.com",
            status: CandidateStatus::Joined,
            client: "Global Inc",
            joined: Some((2024, 10, 16)),
            salary: Some(54_000),
            recruiter: "Mike Johnson",
            team_lead: "David Kumar",
            department: Some("Sales"),
            arpu: Some("12.00"),
        },
        CandidateSeed {
            id: 0x3007,
            name: "Mei Lin",
            email: "mei.lin@example.com",
            status: CandidateStatus::Selected,
            client: "Startup X",
            joined: None,
            salary: None,
            recruiter: "Lisa Wong",
            team_lead: "Lisa Wong",
            department: Some("Tech"),
            arpu: None,
        },
        CandidateSeed {
            id: 0x3008,
            name: "Tom Becker",
            email: "tom.becker@example.com",
            status: CandidateStatus::Rejected,
            client: "Global Inc",
            joined: None,
            salary: None,
            recruiter: "David Kumar",
            team_lead: "David Kumar",
            department: Some("Operations"),
            arpu: None,
        },
        CandidateSeed {
            id: 0x3009,
            name: "Fatima Zahra",
            email: "fatima.zahra@example.com",
            status: CandidateStatus::Joined,
            client: "TechCorp",
            joined: Some((2024, 9, 23)),
            salary: Some(61_000),
            recruiter: "Sarah Chen",
            team_lead: "Lisa Wong",
            department: Some("IT"),
            arpu: Some("15.00"),
        },
        CandidateSeed {
            id: 0x300a,
            name: "Grace Okafor",
            email: "grace.okafor@example.com",
            status: CandidateStatus::Joined,
            client: "Startup X",
            joined: Some((2024, 11, 18)),
            salary: Some(58_000),
            recruiter: "Lisa Wong",
            team_lead: "Lisa Wong",
            department: Some("Tech"),
            arpu: Some("9.75"),
        },
    ];
    seeds.iter().map(candidate).collect()
}

fn closures() -> Result<Vec<Closure>, SeedError> {
    let rows: [(u128, &str, &str, (i32, u32, u32), u32, &str, &str, &str); 5] = [
        (
            0x4001,
            "Fatima Zahra",
            "TechCorp",
            (2024, 9, 23),
            61_000,
            "Sarah Chen",
            "Lisa Wong",
            "15.00",
        ),
        (
            0x4002,
            "Ana Silva",
            "TechCorp",
            (2024, 10, 7),
            68_000,
            "Sarah Chen",
            "Lisa Wong",
            "15.00",
        ),
        (
            0x4003,
            "Ravi Shankar",
            "Global Inc",
            (2024, 10, 16),
            54_000,
            "Mike Johnson",
            "David Kumar",
            "12.00",
        ),
        (
            0x4004,
            "Priya Nair",
            "TechCorp",
            (2024, 11, 4),
            72_000,
            "Sarah Chen",
            "Lisa Wong",
            "15.00",
        ),
        (
            0x4005,
            "Grace Okafor",
            "Startup X",
            (2024, 11, 18),
            58_000,
            "Lisa Wong",
            "Lisa Wong",
            "9.75",
        ),
    ];
    rows.into_iter()
        .map(
            |(id, name, client, joined, salary, recruiter, team_lead, rate)| {
                Ok(Closure {
                    id: Uuid::from_u128(id),
                    candidate_name: name.to_owned(),
                    client: Some(client.to_owned()),
                    position: None,
                    date_of_joining: Some(date(joined.0, joined.1, joined.2)?),
                    salary: Some(salary),
                    recruiter: Some(recruiter.to_owned()),
                    team_lead: Some(team_lead.to_owned()),
                    manager: Some("Rajesh Iyer".to_owned()),
                    arpu: Some(arpu(rate)?),
                    notes: None,
                })
            },
        )
        .collect()
}

/// Build a store seeded with the demo records.
///
/// # Errors
///
/// [`SeedError`] when a fixture value fails domain validation; with the
/// checked-in fixtures this does not happen.
pub fn seed() -> Result<RecordStore, SeedError> {
    let mut store = RecordStore::new();
    for recruiter in recruiters()? {
        store.append(Record::Recruiter(recruiter));
    }
    for client in clients()? {
        store.append(Record::Client(client));
    }
    for row in candidates()? {
        store.append(Record::Candidate(row));
    }
    for closure in closures()? {
        store.append(Record::Closure(closure));
    }
    Ok(store)
}
