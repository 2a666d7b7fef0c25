//! Dragon art for each mood.

use dragon_math::Mood;
use ratatui::style::Color;

const HUNGRY: [&str; 5] = [
    r"      /\_/\   ~ ",
    r"     ( o.o )  food?",
    r"    /|  ^  |\  ",
    r"   /_|_____|_\ ",
    r"      /   \    ",
];

const HAPPY: [&str; 5] = [
    r"      /\_/\   <3",
    r"     ( ^.^ )   ",
    r"    /|  w  |\  ",
    r"   /_|_____|_\ ",
    r"      /   \    ",
];

const SAD: [&str; 5] = [
    r"      /\_/\    ",
    r"     ( ;.; )   ",
    r"    /|  n  |\  ",
    r"   /_|_____|_\ ",
    r"      /   \    ",
];

const SUPER_HAPPY: [&str; 5] = [
    r"   *  /\_/\  * ",
    r"     ( *o* )   ",
    r"   \/|  W  |\/ ",
    r"   /_|_____|_\ ",
    r"   *  /   \  * ",
];

pub fn dragon_art(mood: Mood) -> &'static [&'static str; 5] {
    match mood {
        Mood::Hungry => &HUNGRY,
        Mood::Happy => &HAPPY,
        Mood::Sad => &SAD,
        Mood::SuperHappy => &SUPER_HAPPY,
    }
}

pub fn mood_color(mood: Mood) -> Color {
    match mood {
        Mood::Hungry => Color::LightRed,
        Mood::Happy => Color::Green,
        Mood::Sad => Color::Blue,
        Mood::SuperHappy => Color::Yellow,
    }
}
