//! Country centroids for the map views.
//!
//! ISO 3166-1 alpha-3 code to an approximate (longitude, latitude) point,
//! good enough to place a marker on a world map. Codes absent from the
//! table simply do not plot.

/// Sorted by code so lookups can binary-search.
const CENTROIDS: &[(&str, f64, f64)] = &[
    ("AFG", 67.0, 33.0),
    ("AGO", 17.5, -12.5),
    ("ALB", 20.0, 41.0),
    ("AND", 1.6, 42.5),
    ("ARE", 54.0, 24.0),
    ("ARG", -64.0, -34.0),
    ("ARM", 45.0, 40.0),
    ("ATG", -61.8, 17.05),
    ("AUS", 133.0, -27.0),
    ("AUT", 13.3, 47.3),
    ("AZE", 47.5, 40.5),
    ("BDI", 29.9, -3.5),
    ("BEL", 4.5, 50.8),
    ("BEN", 2.25, 9.5),
    ("BFA", -1.7, 12.2),
    ("BGD", 90.0, 24.0),
    ("BGR", 25.25, 42.75),
    ("BHR", 50.55, 26.0),
    ("BHS", -77.4, 24.25),
    ("BIH", 17.8, 44.0),
    ("BLR", 28.0, 53.0),
    ("BLZ", -88.75, 17.25),
    ("BOL", -65.0, -17.0),
    ("BRA", -55.0, -10.0),
    ("BRB", -59.5, 13.16),
    ("BRN", 114.7, 4.5),
    ("BTN", 90.5, 27.5),
    ("BWA", 24.0, -22.0),
    ("CAF", 21.0, 7.0),
    ("CAN", -95.0, 60.0),
    ("CHE", 8.0, 47.0),
    ("CHL", -71.0, -30.0),
    ("CHN", 105.0, 35.0),
    ("CIV", -5.5, 8.0),
    ("CMR", 12.0, 6.0),
    ("COD", 25.0, 0.0),
    ("COG", 15.0, -1.0),
    ("COL", -72.0, 4.0),
    ("COM", 44.25, -12.17),
    ("CPV", -24.0, 16.0),
    ("CRI", -84.0, 10.0),
    ("CUB", -80.0, 21.5),
    ("CYP", 33.0, 35.0),
    ("CZE", 15.5, 49.75),
    ("DEU", 9.0, 51.0),
    ("DJI", 43.0, 11.5),
    ("DMA", -61.33, 15.42),
    ("DNK", 10.0, 56.0),
    ("DOM", -70.67, 19.0),
    ("DZA", 3.0, 28.0),
    ("ECU", -77.5, -2.0),
    ("EGY", 30.0, 27.0),
    ("ERI", 39.0, 15.0),
    ("ESH", -13.5, 24.5),
    ("ESP", -4.0, 40.0),
    ("EST", 26.0, 59.0),
    ("ETH", 38.0, 8.0),
    ("FIN", 26.0, 64.0),
    ("FJI", 175.0, -18.0),
    ("FRA", 2.0, 46.0),
    ("GAB", 11.75, -1.0),
    ("GBR", -2.0, 54.0),
    ("GEO", 43.5, 42.0),
    ("GHA", -2.0, 8.0),
    ("GIN", -10.0, 11.0),
    ("GMB", -15.5, 13.47),
    ("GNB", -15.0, 12.0),
    ("GNQ", 10.0, 2.0),
    ("GRC", 22.0, 39.0),
    ("GRD", -61.67, 12.12),
    ("GTM", -90.25, 15.5),
    ("GUY", -59.0, 5.0),
    ("HND", -86.5, 15.0),
    ("HRV", 15.5, 45.17),
    ("HTI", -72.42, 19.0),
    ("HUN", 20.0, 47.0),
    ("IDN", 120.0, -5.0),
    ("IND", 77.0, 20.0),
    ("IRL", -8.0, 53.0),
    ("IRN", 53.0, 32.0),
    ("IRQ", 44.0, 33.0),
    ("ISL", -18.0, 65.0),
    ("ISR", 34.75, 31.5),
    ("ITA", 12.83, 42.83),
    ("JAM", -77.5, 18.25),
    ("JOR", 36.0, 31.0),
    ("JPN", 138.0, 36.0),
    ("KAZ", 68.0, 48.0),
    ("KEN", 38.0, 1.0),
    ("KGZ", 75.0, 41.0),
    ("KHM", 105.0, 13.0),
    ("KNA", -62.75, 17.33),
    ("KOR", 127.5, 37.0),
    ("KWT", 47.66, 29.34),
    ("LAO", 105.0, 18.0),
    ("LBN", 35.83, 33.83),
    ("LBR", -9.5, 6.5),
    ("LBY", 17.0, 25.0),
    ("LCA", -61.13, 13.88),
    ("LIE", 9.53, 47.17),
    ("LKA", 81.0, 7.0),
    ("LSO", 28.5, -29.5),
    ("LTU", 24.0, 56.0),
    ("LUX", 6.17, 49.75),
    ("LVA", 25.0, 57.0),
    ("MAR", -5.0, 32.0),
    ("MCO", 7.4, 43.73),
    ("MDA", 29.0, 47.0),
    ("MDG", 47.0, -20.0),
    ("MDV", 73.0, 3.25),
    ("MEX", -102.0, 23.0),
    ("MKD", 21.7, 41.6),
    ("MLI", -4.0, 17.0),
    ("MLT", 14.58, 35.83),
    ("MMR", 98.0, 22.0),
    ("MNE", 19.3, 42.5),
    ("MNG", 105.0, 46.0),
    ("MOZ", 35.0, -18.25),
    ("MRT", -12.0, 20.0),
    ("MUS", 57.55, -20.28),
    ("MWI", 34.0, -13.5),
    ("MYS", 112.5, 2.5),
    ("NAM", 17.0, -22.0),
    ("NER", 8.0, 16.0),
    ("NGA", 8.0, 10.0),
    ("NIC", -85.0, 13.0),
    ("NLD", 5.75, 52.5),
    ("NOR", 10.0, 62.0),
    ("NPL", 84.0, 28.0),
    ("NZL", 174.0, -41.0),
    ("OMN", 57.0, 21.0),
    ("PAK", 70.0, 30.0),
    ("PAN", -80.0, 9.0),
    ("PER", -76.0, -10.0),
    ("PHL", 122.0, 13.0),
    ("PNG", 147.0, -6.0),
    ("POL", 20.0, 52.0),
    ("PRT", -8.0, 39.5),
    ("PRY", -58.0, -23.0),
    ("PSE", 35.25, 32.0),
    ("QAT", 51.25, 25.5),
    ("ROU", 25.0, 46.0),
    ("RUS", 100.0, 60.0),
    ("RWA", 30.0, -2.0),
    ("SAU", 45.0, 25.0),
    ("SDN", 30.0, 15.0),
    ("SEN", -14.0, 14.0),
    ("SGP", 103.8, 1.37),
    ("SLB", 159.0, -8.0),
    ("SLE", -11.5, 8.5),
    ("SLV", -88.92, 13.83),
    ("SMR", 12.42, 43.77),
    ("SOM", 49.0, 10.0),
    ("SRB", 21.0, 44.0),
    ("SSD", 30.0, 8.0),
    ("STP", 7.0, 1.0),
    ("SUR", -56.0, 4.0),
    ("SVK", 19.5, 48.67),
    ("SVN", 15.0, 46.12),
    ("SWE", 15.0, 62.0),
    ("SWZ", 31.5, -26.5),
    ("SYC", 55.67, -4.58),
    ("SYR", 38.0, 35.0),
    ("TCD", 19.0, 15.0),
    ("TGO", 1.17, 8.0),
    ("THA", 100.0, 15.0),
    ("TJK", 71.0, 39.0),
    ("TKM", 60.0, 40.0),
    ("TLS", 125.5, -8.83),
    ("TTO", -61.0, 11.0),
    ("TUN", 9.0, 34.0),
    ("TUR", 35.0, 39.0),
    ("TWN", 121.0, 23.5),
    ("TZA", 35.0, -6.0),
    ("UGA", 32.0, 1.0),
    ("UKR", 32.0, 49.0),
    ("URY", -56.0, -33.0),
    ("USA", -98.0, 39.5),
    ("UZB", 64.0, 41.0),
    ("VAT", 12.45, 41.9),
    ("VCT", -61.2, 13.25),
    ("VEN", -66.0, 8.0),
    ("VNM", 106.0, 16.0),
    ("YEM", 48.0, 15.0),
    ("ZAF", 24.0, -29.0),
    ("ZMB", 30.0, -15.0),
    ("ZWE", 30.0, -20.0),
];

/// Looks up the centroid of an alpha-3 code. Returns `(longitude, latitude)`.
pub fn centroid(code: &str) -> Option<(f64, f64)> {
    CENTROIDS
        .binary_search_by(|(c, _, _)| c.cmp(&code))
        .ok()
        .map(|i| (CENTROIDS[i].1, CENTROIDS[i].2))
}
