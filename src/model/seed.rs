//! The activities every store starts out with.

use super::{Activities, Activity};

/// (name, description, schedule, max_participants, participants)
type SeedRow = (&'static str, &'static str, &'static str, u32, [&'static str; 2]);

const SEED: [SeedRow; 9] = [
    (
        "Basketball Team",
        "Join the school basketball team and compete in local leagues",
        "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
        15,
        ["liam@mergington.edu", "ava@mergington.edu"],
    ),
    (
        "Soccer Club",
        "Practice soccer skills and play friendly matches",
        "Wednesdays, 3:30 PM - 5:30 PM",
        18,
        ["noah@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore painting, drawing, and other visual arts",
        "Mondays, 3:30 PM - 5:00 PM",
        16,
        ["lucas@mergington.edu", "amelia@mergington.edu"],
    ),
    (
        "Drama Society",
        "Participate in theater productions and acting workshops",
        "Fridays, 4:00 PM - 6:00 PM",
        20,
        ["charlotte@mergington.edu", "jack@mergington.edu"],
    ),
    (
        "Mathletes",
        "Compete in math competitions and solve challenging problems",
        "Thursdays, 3:30 PM - 5:00 PM",
        10,
        ["benjamin@mergington.edu", "ella@mergington.edu"],
    ),
    (
        "Science Club",
        "Conduct experiments and explore scientific concepts",
        "Wednesdays, 4:00 PM - 5:30 PM",
        14,
        ["henry@mergington.edu", "grace@mergington.edu"],
    ),
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        ["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        ["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        ["john@mergington.edu", "olivia@mergington.edu"],
    ),
];

pub fn seed_activities() -> Activities {
    SEED.iter()
        .map(|(name, description, schedule, max, participants)| {
            (*name, Activity::new(*description, *schedule, *max, *participants))
        })
        .collect()
}
