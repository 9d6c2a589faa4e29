/*
maze.rs

Copyright 2025 Hervé Quatremain

This file is part of Mazegen.

Mazegen is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazegen is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazegen. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Save and restore a generated maze.
//!
//! The saved object is a serialization of the [`Maze`] object in JSON format by using [`serde`].
//! A saved maze can be rendered again later, with other tiles for example.

use log::debug;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::generator::maze::Maze;

/// Object to save and restore a maze.
pub struct SaverMaze {
    /// Path to the save file.
    save_file: PathBuf,
}

impl SaverMaze {
    /// Create a [`SaverMaze`] object for the given file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Maze file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the saved [`Maze`] object.
    ///
    /// Return the [`Maze`] object or None if the file does not exist.
    pub fn get_maze(&self) -> Result<Option<Maze>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let maze: Maze = serde_json::from_reader(reader)?;
        Ok(Some(maze))
    }

    /// Save the provided [`Maze`] object.
    pub fn save_maze(&self, maze: &Maze) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, maze)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the saved maze.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::carver::MazeCarver;
    use crate::generator::solver;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::env;

    fn saver(name: &str) -> SaverMaze {
        let mut path: PathBuf = env::temp_dir();
        path.push(format!("mazegen-{name}-{}.json", std::process::id()));
        SaverMaze::new(path)
    }

    #[test]
    fn save_and_restore() {
        let mut maze: Maze = MazeCarver::with_rng(StdRng::seed_from_u64(6))
            .generate(9, 7, 4, 4)
            .unwrap();
        solver::solve(&mut maze);

        let s: SaverMaze = saver("save");
        s.save_maze(&maze).unwrap();
        let restored: Maze = s.get_maze().unwrap().unwrap();
        assert_eq!(restored, maze);
        assert!(restored.solution.unwrap().contains((4, 4)));
        s.delete_save();
        assert!(s.get_maze().unwrap().is_none());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let s: SaverMaze = saver("missing");
        s.delete_save();
        assert!(s.get_maze().unwrap().is_none());
    }

    #[test]
    fn corrupted_file_is_an_error() {
        let s: SaverMaze = saver("corrupted");
        std::fs::write(&s.save_file, b"{\"grid\": 3").unwrap();
        assert!(s.get_maze().is_err());
        s.delete_save();
    }

    #[test]
    fn inconsistent_maze_is_an_error() {
        let s: SaverMaze = saver("inconsistent");
        std::fs::write(
            &s.save_file,
            br#"{"grid":{"rows":5,"columns":5,"cells":[128,128,128]},"waypoint":[2,2],"entrance":1,"goal":1}"#,
        )
        .unwrap();
        assert!(s.get_maze().is_err());
        s.delete_save();
    }

    #[test]
    fn released_maze_is_an_error() {
        let mut maze: Maze = MazeCarver::with_rng(StdRng::seed_from_u64(2))
            .generate(6, 5, 3, 3)
            .unwrap();
        maze.release();
        let s: SaverMaze = saver("released");
        s.save_maze(&maze).unwrap();
        assert!(s.get_maze().is_err());
        s.delete_save();
    }

    #[test]
    fn exits_out_of_range_are_an_error() {
        let maze: Maze = MazeCarver::with_rng(StdRng::seed_from_u64(3))
            .generate(6, 5, 3, 3)
            .unwrap();
        let s: SaverMaze = saver("exits");
        for (entrance, goal) in [(0, maze.goal), (7, maze.goal), (maze.entrance, 9)] {
            let mut broken: Maze = maze.clone();
            broken.entrance = entrance;
            broken.goal = goal;
            s.save_maze(&broken).unwrap();
            assert!(s.get_maze().is_err(), "entrance {entrance} goal {goal}");
        }
        s.delete_save();
    }
}
