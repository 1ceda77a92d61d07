//! Static content tables.
//!
//! Tables are indexed cyclically (`index % len`), so large levels repeat
//! entries under distinct pair keys.

pub const EMOJIS: [&str; 10] = ["🐶", "🐱", "🦊", "🐻", "🐼", "🦁", "🐯", "🐨", "🐸", "🦄"];

pub const COLORS: [&str; 8] = [
    "#FF5733", "#33FF57", "#3357FF", "#FF33A1", "#FFC300", "#8E44AD", "#16A085", "#E74C3C",
];

/// (animal, sound it makes)
pub const ANIMALS: [(&str, &str); 6] = [
    ("🐱", "Meow"),
    ("🐶", "Woof"),
    ("🐮", "Moo"),
    ("🐸", "Ribbit"),
    ("🦆", "Quack"),
    ("🐑", "Baa"),
];

/// (flag, country name)
pub const COUNTRIES: [(&str, &str); 6] = [
    ("🇺🇸", "United States"),
    ("🇬🇧", "United Kingdom"),
    ("🇨🇦", "Canada"),
    ("🇯🇵", "Japan"),
    ("🇫🇷", "France"),
    ("🇩🇪", "Germany"),
];

/// (icon, character)
pub const ICONS: [(&str, &str); 6] = [
    ("⚡", "Harry Potter"),
    ("🛡️", "Captain America"),
    ("🦇", "Batman"),
    ("🌊", "Aquaman"),
    ("💍", "Frodo Baggins"),
    ("🕷️", "Spider-Man"),
];

/// (clip file, label)
pub const SOUNDS: [(&str, &str); 5] = [
    ("bell.mp3", "🔔 Bell"),
    ("dog_bark.mp3", "🐶 Dog Bark"),
    ("cat_meow.mp3", "🐱 Cat Meow"),
    ("car_horn.mp3", "🚗 Car Horn"),
    ("laugh.mp3", "😂 Laugh"),
];

/// Cyclic lookup.
#[must_use]
pub fn cyclic<T: Copy>(table: &[T], index: usize) -> T {
    table[index % table.len()]
}
