use serde::{Deserialize, Serialize};

/// 手动输入坐标的校验错误 (提示语面向用户)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    #[error("Coordenadas inválidas")]
    NotANumber,
    #[error("Latitud debe estar entre -90 y 90")]
    LatitudeOutOfRange,
    #[error("Longitud debe estar entre -180 y 180")]
    LongitudeOutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NotANumber);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange);
        }
        Ok(Self { latitude, longitude })
    }

    /// 从文本输入解析
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, CoordinateError> {
        let lat = latitude
            .trim()
            .parse::<f64>()
            .map_err(|_| CoordinateError::NotANumber)?;
        let lng = longitude
            .trim()
            .parse::<f64>()
            .map_err(|_| CoordinateError::NotANumber)?;
        Self::new(lat, lng)
    }
}

/// 客户拜访位置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationData {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    pub timestamp: i64,     // 毫秒
}

/// 浏览器定位失败原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
pub enum GeolocationFailure {
    #[error("Permiso denegado para acceder a la ubicación")]
    PermissionDenied,
    #[error("Información de ubicación no disponible")]
    PositionUnavailable,
    #[error("Tiempo de espera agotado")]
    Timeout,
    #[error("La geolocalización no está soportada en este navegador")]
    Unsupported,
    #[error("Error al obtener la ubicación")]
    Unknown,
}

impl GeolocationFailure {
    /// W3C GeolocationPositionError 代码, 其余代码归为 Unknown
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeolocationFailure::PermissionDenied,
            2 => GeolocationFailure::PositionUnavailable,
            3 => GeolocationFailure::Timeout,
            _ => GeolocationFailure::Unknown,
        }
    }
}
