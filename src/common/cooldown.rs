// src/common/cooldown.rs

// A guarda de "janela rolante": presença e licença duplicavam o mesmo
// padrão (busca o último registro, compara com 24h, grava). A regra pura
// mora aqui; cada serviço só fornece o timestamp do último registro.

use chrono::{DateTime, Duration, Utc};

/// A janela mínima entre duas submissões do mesmo usuário.
pub fn default_window() -> Duration {
    Duration::hours(24)
}

/// Verifica a janela. `Err` carrega quanto tempo ainda falta.
pub fn enforce_window(
    last: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    window: Duration,
) -> Result<(), Duration> {
    match last {
        None => Ok(()),
        Some(last) => {
            let elapsed = now - last;
            if elapsed >= window {
                Ok(())
            } else {
                Err(window - elapsed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn first_submission_passes() {
        assert!(enforce_window(None, t0(), default_window()).is_ok());
    }

    #[test]
    fn submission_one_hour_later_is_rejected() {
        // Marca em t0, tenta de novo em t0+1h
        let result = enforce_window(Some(t0()), t0() + Duration::hours(1), default_window());
        let remaining = result.unwrap_err();
        assert_eq!(remaining, Duration::hours(23));
    }

    #[test]
    fn submission_exactly_at_window_boundary_passes() {
        assert!(enforce_window(Some(t0()), t0() + Duration::hours(24), default_window()).is_ok());
    }

    #[test]
    fn submission_after_window_passes() {
        assert!(enforce_window(Some(t0()), t0() + Duration::hours(25), default_window()).is_ok());
    }

    #[test]
    fn remaining_time_shrinks_as_time_passes() {
        let at_23h = enforce_window(Some(t0()), t0() + Duration::hours(23), default_window());
        assert_eq!(at_23h.unwrap_err(), Duration::hours(1));
    }
}
