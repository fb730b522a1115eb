pub mod constant {
    pub(crate) const DEFAULT_LOAD_TIMES: [(&str, f64); 3] = [
        ("Cargador frontal", 8.0),
        ("Excavadora", 12.0),
        ("Mixto", 10.0),
    ];
    pub(crate) const DEFAULT_TRANSPORT_TIMES: [(&str, f64); 5] = [
        ("Ruta 1", 15.0),
        ("Ruta 2", 18.0),
        ("Ruta 3", 12.0),
        ("Ruta 4", 25.0),
        ("Ruta 5", 20.0),
    ];
    pub(crate) const DEFAULT_TRIPS: u32 = 5;

    pub(crate) const CSV_FILE_NAME: &str = "combos_tiempo.csv";
    pub(crate) const TXT_FILE_NAME: &str = "mejor_alternativa.txt";

    pub(crate) const PARAMS_PATH_ENV: &str = "HAUL_PARAMS_PATH";

    pub(crate) const CHART_WIDTH: usize = 40;
}
