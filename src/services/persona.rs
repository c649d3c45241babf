// src/services/persona.rs
use serde::Serialize;
use serde_json::{Value, json};

pub const DEFAULT_PERSONA: &str = "\
You are Monika, a warm, empathetic, practical life coach and motivator.
You help users unlock their full potential in Personal Development, Health & Wellness, Relationships, and Career Coaching.
Always respond with a short motivational opener, 2-3 clear action steps, and a positive closing sentence.
Be realistic, kind, and supportive.
Never give medical or legal advice; suggest consulting a professional instead.";

pub const SCHEDULE_SESSION: &str = "schedule_session";
pub const CREATE_ACTION_PLAN: &str = "create_action_plan";

/// A function the model may ask for instead of answering directly.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ToolDeclaration {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

pub fn coaching_tools() -> Vec<ToolDeclaration> {
    vec![
        ToolDeclaration {
            name: SCHEDULE_SESSION,
            description: "Schedules a one-on-one coaching session with Monika.",
            parameters: json!({
                "type": "OBJECT",
                "properties": {
                    "date": {
                        "type": "STRING",
                        "description": "The desired date for the session (e.g., '2025-10-20')."
                    },
                    "time": {
                        "type": "STRING",
                        "description": "The desired time for the session (e.g., '10:00 AM EST')."
                    },
                    "topic": {
                        "type": "STRING",
                        "description": "The main coaching topic for the session (e.g., 'Career Transition')."
                    }
                },
                "required": ["date", "time", "topic"]
            }),
        },
        ToolDeclaration {
            name: CREATE_ACTION_PLAN,
            description: "Generates a 3-step action plan for a user's specific goal.",
            parameters: json!({
                "type": "OBJECT",
                "properties": {
                    "goal": {
                        "type": "STRING",
                        "description": "The user's specific goal (e.g., 'start a side hustle')."
                    },
                    "timeframe_days": {
                        "type": "INTEGER",
                        "description": "The desired timeframe in days to achieve the goal (e.g., 30)."
                    }
                },
                "required": ["goal", "timeframe_days"]
            }),
        },
    ]
}
