//! Track model.
//!
//! Static definition of the track: its length and the grammar challenge bound
//! to each tile index. Pure lookup, validated once at construction.

use std::fmt;

use serde::{Serialize, Deserialize};

/// A single tile: the phrase shown to the player, whether it is grammatically
/// correct, and (when it is not) the accepted corrections. The first accepted
/// correction is the one revealed when the player runs out of attempts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileChallenge {
    pub text: String,
    pub ok: bool,
    pub answers: Vec<String>,
}

/// Track data faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    /// Tile index outside the track bounds. Phase gating makes this
    /// unreachable during play; hitting it is a programmer error.
    OutOfRange { index: usize, len: usize },
    /// A tile marked incorrect carries no accepted correction. Rejected at
    /// load time, never at play time.
    MissingAnswerSet { index: usize },
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackError::OutOfRange { index, len } => {
                write!(f, "tile index {} outside track of length {}", index, len)
            }
            TrackError::MissingAnswerSet { index } => {
                write!(f, "tile {} is marked incorrect but has no accepted answers", index)
            }
        }
    }
}

impl std::error::Error for TrackError {}

/// The immutable track a game is played on.
#[derive(Debug, Clone)]
pub struct Track {
    tiles: Vec<TileChallenge>,
}

impl Track {
    /// Build a track, checking that every tile marked incorrect has at least
    /// one accepted correction.
    pub fn new(tiles: Vec<TileChallenge>) -> Result<Self, TrackError> {
        for (index, tile) in tiles.iter().enumerate() {
            if !tile.ok && tile.answers.is_empty() {
                return Err(TrackError::MissingAnswerSet { index });
            }
        }
        Ok(Track { tiles })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Index of the goal tile.
    pub fn last_index(&self) -> usize {
        self.tiles.len() - 1
    }

    pub fn challenge_at(&self, index: usize) -> Result<&TileChallenge, TrackError> {
        self.tiles.get(index).ok_or(TrackError::OutOfRange {
            index,
            len: self.tiles.len(),
        })
    }

    /// The built-in Spanish A1/A2 track: 32 tiles, start and goal trivially
    /// correct, 30 grammar challenges in between.
    pub fn builtin() -> Result<Self, TrackError> {
        Self::new(vec![
            correct("Inicio"), // 0
            wrong("Yo soy Español y mi padre es Alemán.", &["Yo soy español y mi padre es alemán"]),
            wrong("La gente son muy simpáticas.", &["La gente es muy simpática"]),
            correct("Mi hermano es más alto que tú."),
            wrong("A mí me gustan bailar y cantar.", &["A mí me gusta bailar y cantar", "Me gusta bailar y cantar"]),
            wrong("Hoy hace muy sol.", &["Hoy hace mucho sol"]),
            wrong("Yo tengo ventidós años.", &["Yo tengo veintidós años", "Tengo veintidós años"]),
            wrong("¿De dónde vives tú?", &["¿Dónde vives tú?", "¿Dónde vives?"]),
            wrong("Nosotros vivemos en Madrid.", &["Nosotros vivimos en Madrid", "Vivimos en Madrid"]),
            wrong("La casa de María es rojo.", &["La casa de María es roja"]),
            correct("Mañana voy a ir a comer pizza."),
            wrong("Son la una y media.", &["Es la una y media"]),
            wrong("La problema es difícil.", &["El problema es difícil"]),
            wrong("¿Qué le pasa a Juan? ¿Es cansado?", &["¿Qué le pasa a Juan? ¿Está cansado?", "¿Está cansado?"]),
            wrong("Ayer Rebeca fui a la playa.", &["Ayer Rebeca fue a la playa"]),
            wrong("No sabió cómo responder la pregunta de la entrevista.", &["No supo cómo responder la pregunta de la entrevista", "No supo cómo responder"]),
            correct("Quiero un café con leche."),
            wrong("Me duele el mano.", &["Me duele la mano"]),
            correct("El niño está escribiendo."),
            wrong("Mi padre es policio.", &["Mi padre es policía"]),
            wrong("Voy en la escuela.", &["Voy a la escuela"]),
            wrong("Ella se levanta en las ocho.", &["Ella se levanta a las ocho", "Se levanta a las ocho"]),
            wrong("Ayer visitaba un centro comercial muy grande.", &["Ayer visité un centro comercial muy grande", "Ayer visité un centro comercial"]),
            wrong("Yo haco los deberes.", &["Yo hago los deberes", "Hago los deberes"]),
            wrong("Tiene muchas personas en el parque.", &["Hay muchas personas en el parque"]),
            correct("El fin de semana pasado comí paella."),
            wrong("Estoy mucho cansado.", &["Estoy muy cansado"]),
            wrong("No tengo dineros.", &["No tengo dinero"]),
            wrong("Mi amigo es franceso y su novia es francesa.", &["Mi amigo es francés y su novia es francesa"]),
            wrong("Yo sabo hablar español.", &["Yo sé hablar español", "Sé hablar español"]),
            correct("Tengo dolor de piernas."),
            correct("Meta"), // 31
        ])
    }
}

fn correct(text: &str) -> TileChallenge {
    TileChallenge {
        text: text.to_string(),
        ok: true,
        answers: Vec::new(),
    }
}

fn wrong(text: &str, answers: &[&str]) -> TileChallenge {
    TileChallenge {
        text: text.to_string(),
        ok: false,
        answers: answers.iter().map(|a| a.to_string()).collect(),
    }
}
