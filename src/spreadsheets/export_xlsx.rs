use crate::domain::spot::ParkingSpot;
use crate::errors::{AppError, AppResult};
use rust_xlsxwriter::{Workbook, XlsxError};

const HEADERS: [&str; 11] = [
    "Espacio",
    "Tipo",
    "Estado",
    "Propietario",
    "Apartamento",
    "Placa",
    "Tipo de vehículo",
    "Modelo",
    "Duración (horas)",
    "Asignado",
    "Salida estimada",
];

fn xlsx_err(what: &str) -> impl Fn(XlsxError) -> AppError + '_ {
    move |e| AppError::Xlsx(format!("Failed to write {what}: {e}"))
}

/// Writes one row per spot, in the order given, and returns the workbook bytes.
pub fn export_spots_xlsx(spots: &[&ParkingSpot], sheet_name: &str) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(xlsx_err("sheet name"))?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(xlsx_err(header))?;
    }

    for (i, spot) in spots.iter().enumerate() {
        let r = (i + 1) as u32;
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let timestamp = |value: Option<chrono::NaiveDateTime>| {
            value
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default()
        };

        let columns = [
            spot.number.clone(),
            spot.category.label().to_string(),
            spot.occupancy.label().to_string(),
            text(&spot.owner),
            text(&spot.apartment),
            text(&spot.license_plate),
            text(&spot.vehicle_type),
            text(&spot.vehicle_model),
        ];
        for (col, value) in columns.iter().enumerate() {
            worksheet
                .write_string(r, col as u16, value)
                .map_err(xlsx_err(HEADERS[col]))?;
        }

        if let Some(hours) = spot.visit_duration_hours {
            worksheet
                .write_number(r, 8, hours)
                .map_err(xlsx_err(HEADERS[8]))?;
        }

        worksheet
            .write_string(r, 9, timestamp(spot.assigned_at))
            .map_err(xlsx_err(HEADERS[9]))?;
        worksheet
            .write_string(r, 10, timestamp(spot.expected_departure()))
            .map_err(xlsx_err(HEADERS[10]))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| AppError::Xlsx(format!("Failed to save workbook: {e}")))
}

/// e.g. `parqueaderos_2024-03-10.xlsx`
pub fn export_filename(date: chrono::NaiveDate) -> String {
    format!("parqueaderos_{}.xlsx", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_spots;

    #[test]
    fn exports_a_zip_container() {
        let spots = sample_spots().unwrap();
        let refs: Vec<&ParkingSpot> = spots.iter().collect();
        let buffer = export_spots_xlsx(&refs, "Parqueaderos").unwrap();

        // xlsx files are zip archives
        assert!(buffer.len() > 100);
        assert_eq!(&buffer[..2], b"PK");
    }

    #[test]
    fn invalid_sheet_name_is_an_error() {
        let err = export_spots_xlsx(&[], "bad[name]").unwrap_err();
        assert!(matches!(err, AppError::Xlsx(_)));
    }

    #[test]
    fn filename_carries_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(export_filename(date), "parqueaderos_2024-03-10.xlsx");
    }
}
