// ./src/lib.rs

//! Minkowski-Summe und -Differenz konvexer Polygone, Inkreis/Umkreis und
//! Hausdorff-basierte Anpassung von `B ⊕ X` an eine Zielform `A`.

pub mod analysis;
pub mod debug;
pub mod math;
