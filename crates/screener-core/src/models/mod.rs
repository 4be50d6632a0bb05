pub mod answer;
pub mod band;
pub mod language;
pub mod question;
pub mod record;
pub mod scale;
pub mod score;
