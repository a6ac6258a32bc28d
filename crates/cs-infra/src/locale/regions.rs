/// States with their districts, in picker order.
pub(super) const STATES: &[(&str, &[&str])] = &[
    (
        "Andhra Pradesh",
        &["Anantapur", "Chittoor", "Guntur", "Krishna", "Kurnool"],
    ),
    ("Bihar", &["Bhagalpur", "Darbhanga", "Gaya", "Muzaffarpur", "Patna"]),
    (
        "Gujarat",
        &["Ahmedabad", "Banaskantha", "Junagadh", "Rajkot", "Surat"],
    ),
    ("Haryana", &["Ambala", "Hisar", "Karnal", "Rohtak", "Sirsa"]),
    (
        "Karnataka",
        &["Belagavi", "Dharwad", "Kalaburagi", "Mysuru", "Raichur"],
    ),
    (
        "Madhya Pradesh",
        &["Bhopal", "Indore", "Jabalpur", "Sagar", "Ujjain"],
    ),
    (
        "Maharashtra",
        &["Ahmednagar", "Aurangabad", "Nagpur", "Nashik", "Pune", "Solapur"],
    ),
    ("Punjab", &["Amritsar", "Bathinda", "Jalandhar", "Ludhiana", "Patiala"]),
    ("Rajasthan", &["Ajmer", "Bikaner", "Jaipur", "Jodhpur", "Kota"]),
    (
        "Uttar Pradesh",
        &["Agra", "Gorakhpur", "Lucknow", "Meerut", "Varanasi"],
    ),
];
