//! Fuente de tiempo inyectable.
//!
//! El executor sella los nombres de salida con la hora actual y el
//! orquestador mide la duración de la corrida; ambos leen el tiempo a través
//! de `Clock` para que los tests puedan congelarlo o avanzarlo.

use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reloj del sistema.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Reloj falso: devuelve un instante fijo y opcionalmente avanza `tick` tras
/// cada lectura.
#[derive(Debug)]
pub struct FixedClock {
    current: Cell<DateTime<Utc>>,
    tick: Duration,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { current: Cell::new(at),
               tick: Duration::zero() }
    }

    /// Cada llamada a `now()` avanza el reloj `tick` después de leerlo.
    pub fn ticking(at: DateTime<Utc>, tick: Duration) -> Self {
        Self { current: Cell::new(at), tick }
    }

    pub fn advance(&self, by: Duration) {
        self.current.set(self.current.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let at = self.current.get();
        self.current.set(at + self.tick);
        at
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
