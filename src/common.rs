/*
 *  Cogs, a move generation engine for irregular chess variants.
 *  Copyright (C) 2024 ToTheAnd
 *
 *  Cogs is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  Cogs is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with Cogs. If not, see <https://www.gnu.org/licenses/>.
 */

pub type Res<T> = anyhow::Result<T>;

/// Coordinates and offsets share one integer type.
/// Signed, because offset arithmetic may step outside the board before a bounds check filters it.
pub type DimT = i16;

pub fn file_to_char(file: DimT) -> char {
    debug_assert!((0..26).contains(&file));
    (b'a' + file as u8) as char
}

pub fn char_to_file(c: char) -> DimT {
    debug_assert!(c.is_ascii_lowercase());
    (c as u8 - b'a') as DimT
}
