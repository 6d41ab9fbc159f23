//! Gesten-Intents aus UI/System ohne direkte Mutationslogik.

use glam::DVec2;

/// Richtung eines Keyboard-Nudges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    /// +y um eine Schrittweite
    Up,
    /// -y um eine Schrittweite
    Down,
    /// -x um eine Schrittweite
    Left,
    /// +x um eine Schrittweite
    Right,
}

/// Eingabe-Events an den Graph-Controller.
///
/// Pointer-Positionen kommen in Surface-Koordinaten an; die Umrechnung
/// ins Grid übernimmt der Controller über den Mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphIntent {
    /// Pointer-Press: Drag starten bzw. Ungleichungs-Klick auswerten
    DragStartRequested {
        /// Cursor-Position in Surface-Koordinaten
        surface_pos: DVec2,
    },
    /// Pointer-Move während einer Drag-Session
    DragMoveRequested {
        /// Cursor-Position in Surface-Koordinaten
        surface_pos: DVec2,
    },
    /// Pointer-Release: letzter Move-Schritt, dann Session beenden
    DragEndRequested {
        /// Cursor-Position in Surface-Koordinaten
        surface_pos: DVec2,
    },
    /// Keyboard-Nudge des fokussierten Punkts (atomar: Press+Move+Release)
    NudgeRequested {
        /// Verschieberichtung
        direction: NudgeDirection,
    },
    /// Keyboard-Fokus auf einen Kontrollpunkt setzen
    PointFocusRequested {
        /// Punkt-Index
        index: usize,
    },
    /// Keyboard-Fokus entfernen
    FocusClearRequested,
    /// Render-Ziel wurde skaliert
    SurfaceResized {
        /// Neue Surface-Größe
        size: DVec2,
    },
}
