//! Semantic action IDs for Paperclip Farm click targets.
//!
//! Registered during render and dispatched via `InputEvent::Click`.

pub const PRODUCE: u16 = 0;

/// Keys that punch out a paperclip. Letters are reserved for the shop.
pub const PRODUCE_KEYS: [char; 2] = [' ', '\n'];

/// Purchase: base + display index of the upgrade.
pub const BUY_UPGRADE_BASE: u16 = 100;

/// Keyboard letter for the upgrade at `index` ('a', 'b', ...).
pub fn upgrade_key(index: usize) -> Option<char> {
    (index < 26).then(|| (b'a' + index as u8) as char)
}

/// Inverse of [`upgrade_key`]; upper case works too.
pub fn key_upgrade_index(key: char) -> Option<usize> {
    let key = key.to_ascii_lowercase();
    key.is_ascii_lowercase().then(|| (key as u8 - b'a') as usize)
}

/// Display index for a buy action, if `action_id` is one.
pub fn buy_index(action_id: u16) -> Option<usize> {
    action_id
        .checked_sub(BUY_UPGRADE_BASE)
        .map(|i| i as usize)
}
