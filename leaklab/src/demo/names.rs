pub(super) const FIRST_NAMES: &[&str] = &[
    "Emma", "Liam", "Olivia", "Noah", "Ava", "Oliver", "Isabella", "Mason", "Sophia", "Logan",
    "Mia", "Lucas", "Charlotte", "Ethan", "Amelia", "Elijah", "Harper", "Benjamin", "Evelyn",
    "Sebastian", "Abigail", "Jackson", "Emily", "Aiden", "Elizabeth", "Matthew", "Mila", "Samuel",
    "Ella", "David", "Scarlett", "Joseph", "Madison", "Carter", "Layla", "Owen", "Chloe", "Wyatt",
    "Grace", "John", "Ellie", "Jack", "Zoey", "Luke", "Penelope", "Jayden", "Riley", "Dylan",
    "Nora", "Leo", "Lily", "Alexander", "Hannah", "Grayson", "Luna", "Michael", "Zoe", "James",
    "Stella", "Ezra", "Addison", "Isaac", "Lillian", "Gabriel", "Aubrey", "Julian", "Audrey",
    "Mateo", "Elliot", "Ian", "Rose", "Josiah", "Violet", "Theodore", "Claire", "Avery",
    "Lincoln", "Lucy", "Asher", "Caroline", "Nova", "Jonathan", "Genesis", "Xavier", "Emilia",
    "Jaxon", "Kennedy", "Isaiah", "Samantha", "Elias", "Maya", "Aaron", "Willow", "Charles",
    "Kinsley", "Christopher", "Naomi", "Cameron", "Aaliyah",
];

pub(super) const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts", "Phillips", "Evans", "Turner",
    "Parker", "Collins", "Edwards", "Stewart", "Morris", "Murphy", "Cook", "Rogers", "Morgan",
    "Peterson", "Cooper", "Reed", "Bailey", "Bell", "Gomez", "Kelly", "Howard", "Ward", "Cox",
    "Diaz", "Richardson", "Wood", "Watson", "Brooks", "Bennett", "Gray", "James", "Reyes",
    "Cruz", "Hughes", "Price", "Myers", "Long", "Foster", "Sanders", "Ross", "Morales", "Powell",
    "Sullivan", "Russell", "Ortiz", "Jenkins", "Gutierrez", "Perry", "Butler", "Barnes",
    "Fisher", "Henderson", "Coleman", "Simmons", "Patterson", "Jordan", "Reynolds",
];
