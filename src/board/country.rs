//! Built-in country table.
//!
//! Each entry names a country and the countries it shares a land border
//! with, in the order the map lists them. The table is symmetric: if A lists
//! B then B lists A. It covers two landmasses, the Americas and Afro-Eurasia,
//! which share no border.

/// Number of countries in the built-in table.
pub const COUNTRY_COUNT: usize = 158;

/// The built-in border table, in map order.
pub static COUNTRY_BORDERS: [(&str, &[&str]); COUNTRY_COUNT] = [
    // North and Central America
    ("Kanada", &["Sjedinjene Američke Države"]),
    ("Sjedinjene Američke Države", &["Kanada", "Meksiko"]),
    (
        "Meksiko",
        &["Sjedinjene Američke Države", "Gvatemala", "Belize"],
    ),
    ("Gvatemala", &["Meksiko", "Belize", "Honduras", "Salvador"]),
    ("Belize", &["Meksiko", "Gvatemala"]),
    ("Salvador", &["Gvatemala", "Honduras"]),
    ("Honduras", &["Gvatemala", "Salvador", "Nikaragva"]),
    ("Nikaragva", &["Honduras", "Kostarika"]),
    ("Kostarika", &["Nikaragva", "Panama"]),
    ("Panama", &["Kostarika", "Kolumbija"]),
    // South America
    (
        "Kolumbija",
        &["Panama", "Venecuela", "Brazil", "Peru", "Ekvador"],
    ),
    ("Venecuela", &["Kolumbija", "Brazil", "Gvajana"]),
    ("Gvajana", &["Venecuela", "Brazil", "Surinam"]),
    ("Surinam", &["Gvajana", "Brazil", "Francuska Gvajana"]),
    ("Francuska Gvajana", &["Surinam", "Brazil"]),
    (
        "Brazil",
        &[
            "Francuska Gvajana",
            "Surinam",
            "Gvajana",
            "Venecuela",
            "Kolumbija",
            "Peru",
            "Bolivija",
            "Paragvaj",
            "Argentina",
            "Urugvaj",
        ],
    ),
    ("Ekvador", &["Kolumbija", "Peru"]),
    (
        "Peru",
        &["Ekvador", "Kolumbija", "Brazil", "Bolivija", "Čile"],
    ),
    (
        "Bolivija",
        &["Peru", "Brazil", "Paragvaj", "Argentina", "Čile"],
    ),
    ("Paragvaj", &["Bolivija", "Brazil", "Argentina"]),
    ("Urugvaj", &["Brazil", "Argentina"]),
    (
        "Argentina",
        &["Čile", "Bolivija", "Paragvaj", "Brazil", "Urugvaj"],
    ),
    ("Čile", &["Peru", "Bolivija", "Argentina"]),
    // Europe, Asia and Africa
    (
        "Srbija",
        &[
            "Mađarska",
            "Rumunija",
            "Bugarska",
            "Severna Makedonija",
            "Crna Gora",
            "Bosna i Hercegovina",
            "Hrvatska",
            "Kosovo",
        ],
    ),
    (
        "Mađarska",
        &[
            "Slovačka",
            "Ukrajina",
            "Rumunija",
            "Srbija",
            "Hrvatska",
            "Slovenija",
            "Austrija",
        ],
    ),
    (
        "Rumunija",
        &["Ukrajina", "Moldavija", "Bugarska", "Srbija", "Mađarska"],
    ),
    (
        "Bugarska",
        &[
            "Rumunija",
            "Turska",
            "Grčka",
            "Severna Makedonija",
            "Srbija",
        ],
    ),
    (
        "Severna Makedonija",
        &["Srbija", "Bugarska", "Grčka", "Albanija", "Kosovo"],
    ),
    (
        "Kosovo",
        &["Srbija", "Severna Makedonija", "Albanija", "Crna Gora"],
    ),
    (
        "Crna Gora",
        &[
            "Hrvatska",
            "Bosna i Hercegovina",
            "Srbija",
            "Kosovo",
            "Albanija",
        ],
    ),
    ("Bosna i Hercegovina", &["Hrvatska", "Srbija", "Crna Gora"]),
    (
        "Hrvatska",
        &[
            "Slovenija",
            "Mađarska",
            "Srbija",
            "Bosna i Hercegovina",
            "Crna Gora",
        ],
    ),
    (
        "Slovenija",
        &["Italija", "Austrija", "Mađarska", "Hrvatska"],
    ),
    (
        "Italija",
        &[
            "Francuska",
            "Švajcarska",
            "Austrija",
            "Slovenija",
            "San Marino",
            "Vatikan",
        ],
    ),
    ("San Marino", &["Italija"]),
    ("Vatikan", &["Italija"]),
    (
        "Austrija",
        &[
            "Nemačka",
            "Češka",
            "Slovačka",
            "Mađarska",
            "Slovenija",
            "Italija",
            "Švajcarska",
            "Lihtenštajn",
        ],
    ),
    ("Lihtenštajn", &["Švajcarska", "Austrija"]),
    (
        "Švajcarska",
        &["Francuska", "Nemačka", "Austrija", "Lihtenštajn", "Italija"],
    ),
    (
        "Francuska",
        &[
            "Belgija",
            "Luksemburg",
            "Nemačka",
            "Švajcarska",
            "Italija",
            "Monako",
            "Španija",
            "Andora",
        ],
    ),
    ("Monako", &["Francuska"]),
    ("Španija", &["Francuska", "Andora", "Portugal", "Gibraltar"]),
    ("Andora", &["Francuska", "Španija"]),
    ("Portugal", &["Španija"]),
    ("Gibraltar", &["Španija"]),
    (
        "Nemačka",
        &[
            "Danska",
            "Poljska",
            "Češka",
            "Austrija",
            "Švajcarska",
            "Francuska",
            "Luksemburg",
            "Belgija",
            "Holandija",
        ],
    ),
    (
        "Belgija",
        &["Holandija", "Nemačka", "Luksemburg", "Francuska"],
    ),
    ("Luksemburg", &["Belgija", "Nemačka", "Francuska"]),
    ("Holandija", &["Belgija", "Nemačka"]),
    ("Češka", &["Nemačka", "Poljska", "Slovačka", "Austrija"]),
    (
        "Slovačka",
        &["Poljska", "Ukrajina", "Mađarska", "Austrija", "Češka"],
    ),
    (
        "Poljska",
        &[
            "Nemačka",
            "Češka",
            "Slovačka",
            "Ukrajina",
            "Belorusija",
            "Litvanija",
            "Rusija",
        ],
    ),
    ("Danska", &["Nemačka", "Švedska"]),
    ("Švedska", &["Norveška", "Finska", "Danska"]),
    ("Norveška", &["Finska", "Švedska", "Rusija"]),
    ("Finska", &["Norveška", "Švedska", "Rusija"]),
    (
        "Rusija",
        &[
            "Norveška",
            "Finska",
            "Estonija",
            "Letonija",
            "Litvanija",
            "Poljska",
            "Belorusija",
            "Ukrajina",
            "Gruzija",
            "Azerbejdžan",
            "Kazahstan",
            "Mongolija",
            "Kina",
            "Severna Koreja",
        ],
    ),
    ("Estonija", &["Rusija", "Letonija"]),
    (
        "Letonija",
        &["Estonija", "Rusija", "Belorusija", "Litvanija"],
    ),
    (
        "Litvanija",
        &["Letonija", "Belorusija", "Poljska", "Rusija"],
    ),
    (
        "Belorusija",
        &["Rusija", "Ukrajina", "Poljska", "Litvanija", "Letonija"],
    ),
    (
        "Ukrajina",
        &[
            "Belorusija",
            "Rusija",
            "Moldavija",
            "Rumunija",
            "Mađarska",
            "Slovačka",
            "Poljska",
        ],
    ),
    ("Moldavija", &["Ukrajina", "Rumunija"]),
    (
        "Albanija",
        &["Crna Gora", "Kosovo", "Severna Makedonija", "Grčka"],
    ),
    (
        "Grčka",
        &["Albanija", "Severna Makedonija", "Bugarska", "Turska"],
    ),
    (
        "Turska",
        &[
            "Grčka",
            "Bugarska",
            "Gruzija",
            "Jermenija",
            "Azerbejdžan",
            "Iran",
            "Irak",
            "Sirija",
        ],
    ),
    ("Gruzija", &["Rusija", "Jermenija", "Turska", "Azerbejdžan"]),
    ("Jermenija", &["Gruzija", "Azerbejdžan", "Iran", "Turska"]),
    (
        "Azerbejdžan",
        &["Rusija", "Gruzija", "Jermenija", "Iran", "Turska"],
    ),
    (
        "Iran",
        &[
            "Turska",
            "Jermenija",
            "Azerbejdžan",
            "Turkmenistan",
            "Avganistan",
            "Pakistan",
            "Irak",
        ],
    ),
    (
        "Turkmenistan",
        &["Kazahstan", "Uzbekistan", "Avganistan", "Iran"],
    ),
    (
        "Kazahstan",
        &["Rusija", "Kina", "Kirgistan", "Uzbekistan", "Turkmenistan"],
    ),
    (
        "Uzbekistan",
        &[
            "Kazahstan",
            "Kirgistan",
            "Tadžikistan",
            "Avganistan",
            "Turkmenistan",
        ],
    ),
    (
        "Kirgistan",
        &["Kazahstan", "Kina", "Tadžikistan", "Uzbekistan"],
    ),
    (
        "Tadžikistan",
        &["Kirgistan", "Kina", "Avganistan", "Uzbekistan"],
    ),
    (
        "Avganistan",
        &[
            "Turkmenistan",
            "Uzbekistan",
            "Tadžikistan",
            "Kina",
            "Pakistan",
            "Iran",
        ],
    ),
    ("Pakistan", &["Iran", "Avganistan", "Kina", "Indija"]),
    (
        "Indija",
        &["Pakistan", "Kina", "Nepal", "Butan", "Bangladeš", "Mjanmar"],
    ),
    (
        "Kina",
        &[
            "Rusija",
            "Mongolija",
            "Severna Koreja",
            "Vijetnam",
            "Laos",
            "Mjanmar",
            "Indija",
            "Butan",
            "Nepal",
            "Pakistan",
            "Avganistan",
            "Tadžikistan",
            "Kirgistan",
            "Kazahstan",
        ],
    ),
    ("Mongolija", &["Rusija", "Kina"]),
    ("Severna Koreja", &["Kina", "Rusija", "Južna Koreja"]),
    ("Južna Koreja", &["Severna Koreja"]),
    ("Nepal", &["Indija", "Kina"]),
    ("Butan", &["Indija", "Kina"]),
    ("Bangladeš", &["Indija", "Mjanmar"]),
    (
        "Mjanmar",
        &["Indija", "Bangladeš", "Kina", "Laos", "Tajland"],
    ),
    ("Tajland", &["Mjanmar", "Laos", "Kambodža", "Malezija"]),
    (
        "Laos",
        &["Kina", "Mjanmar", "Tajland", "Kambodža", "Vijetnam"],
    ),
    ("Vijetnam", &["Kina", "Laos", "Kambodža"]),
    ("Kambodža", &["Tajland", "Laos", "Vijetnam"]),
    ("Malezija", &["Tajland", "Singapur", "Brunej", "Indonezija"]),
    ("Singapur", &["Malezija"]),
    ("Brunej", &["Malezija"]),
    (
        "Indonezija",
        &["Malezija", "Papua Nova Gvineja", "Istočni Timor"],
    ),
    ("Istočni Timor", &["Indonezija"]),
    ("Papua Nova Gvineja", &["Indonezija"]),
    (
        "Irak",
        &[
            "Turska",
            "Sirija",
            "Jordan",
            "Saudijska Arabija",
            "Kuvajt",
            "Iran",
        ],
    ),
    ("Sirija", &["Turska", "Irak", "Jordan", "Liban", "Izrael"]),
    (
        "Jordan",
        &["Sirija", "Irak", "Saudijska Arabija", "Izrael", "Palestina"],
    ),
    ("Liban", &["Sirija", "Izrael"]),
    (
        "Izrael",
        &["Liban", "Sirija", "Jordan", "Egipat", "Palestina"],
    ),
    ("Palestina", &["Izrael", "Egipat", "Jordan"]),
    ("Egipat", &["Izrael", "Palestina", "Sudan", "Libija"]),
    (
        "Libija",
        &["Egipat", "Sudan", "Čad", "Niger", "Alžir", "Tunis"],
    ),
    (
        "Sudan",
        &[
            "Egipat",
            "Libija",
            "Čad",
            "Centralnoafrička Republika",
            "Južni Sudan",
            "Etiopija",
            "Eritreja",
        ],
    ),
    (
        "Južni Sudan",
        &[
            "Sudan",
            "Etiopija",
            "Kenija",
            "Uganda",
            "Demokratska Republika Kongo",
            "Centralnoafrička Republika",
        ],
    ),
    ("Eritreja", &["Sudan", "Etiopija", "Džibuti"]),
    (
        "Etiopija",
        &[
            "Eritreja",
            "Džibuti",
            "Somalija",
            "Kenija",
            "Južni Sudan",
            "Sudan",
        ],
    ),
    ("Džibuti", &["Eritreja", "Etiopija", "Somalija"]),
    ("Somalija", &["Džibuti", "Etiopija", "Kenija"]),
    (
        "Kenija",
        &["Somalija", "Etiopija", "Južni Sudan", "Uganda", "Tanzanija"],
    ),
    (
        "Uganda",
        &[
            "Južni Sudan",
            "Kenija",
            "Tanzanija",
            "Ruanda",
            "Demokratska Republika Kongo",
        ],
    ),
    (
        "Ruanda",
        &[
            "Uganda",
            "Tanzanija",
            "Burundi",
            "Demokratska Republika Kongo",
        ],
    ),
    (
        "Burundi",
        &["Ruanda", "Tanzanija", "Demokratska Republika Kongo"],
    ),
    (
        "Tanzanija",
        &[
            "Kenija",
            "Uganda",
            "Ruanda",
            "Burundi",
            "Demokratska Republika Kongo",
            "Zambija",
            "Malavi",
            "Mozambik",
        ],
    ),
    (
        "Demokratska Republika Kongo",
        &[
            "Centralnoafrička Republika",
            "Južni Sudan",
            "Uganda",
            "Ruanda",
            "Burundi",
            "Tanzanija",
            "Zambija",
            "Angola",
            "Republika Kongo",
        ],
    ),
    (
        "Republika Kongo",
        &[
            "Gabon",
            "Kamerun",
            "Centralnoafrička Republika",
            "Demokratska Republika Kongo",
            "Angola",
        ],
    ),
    (
        "Centralnoafrička Republika",
        &[
            "Čad",
            "Sudan",
            "Južni Sudan",
            "Demokratska Republika Kongo",
            "Republika Kongo",
            "Kamerun",
        ],
    ),
    (
        "Kamerun",
        &[
            "Nigerija",
            "Čad",
            "Centralnoafrička Republika",
            "Republika Kongo",
            "Gabon",
            "Ekvatorijalna Gvineja",
        ],
    ),
    (
        "Gabon",
        &["Ekvatorijalna Gvineja", "Kamerun", "Republika Kongo"],
    ),
    ("Ekvatorijalna Gvineja", &["Kamerun", "Gabon"]),
    (
        "Čad",
        &[
            "Libija",
            "Sudan",
            "Centralnoafrička Republika",
            "Kamerun",
            "Nigerija",
            "Niger",
        ],
    ),
    (
        "Niger",
        &[
            "Libija",
            "Čad",
            "Nigerija",
            "Benin",
            "Burkina Faso",
            "Mali",
            "Alžir",
        ],
    ),
    ("Nigerija", &["Niger", "Čad", "Kamerun", "Benin"]),
    ("Benin", &["Niger", "Nigerija", "Togo", "Burkina Faso"]),
    ("Togo", &["Benin", "Burkina Faso", "Gana"]),
    (
        "Burkina Faso",
        &["Mali", "Niger", "Benin", "Togo", "Gana", "Obala Slonovače"],
    ),
    ("Gana", &["Burkina Faso", "Togo", "Obala Slonovače"]),
    (
        "Obala Slonovače",
        &["Liberija", "Gvineja", "Mali", "Burkina Faso", "Gana"],
    ),
    ("Liberija", &["Sijera Leone", "Gvineja", "Obala Slonovače"]),
    ("Sijera Leone", &["Gvineja", "Liberija"]),
    (
        "Gvineja",
        &[
            "Gvineja Bisao",
            "Senegal",
            "Mali",
            "Obala Slonovače",
            "Liberija",
            "Sijera Leone",
        ],
    ),
    ("Gvineja Bisao", &["Senegal", "Gvineja"]),
    (
        "Senegal",
        &["Mauritanija", "Mali", "Gvineja", "Gvineja Bisao", "Gambija"],
    ),
    ("Gambija", &["Senegal"]),
    (
        "Mali",
        &[
            "Alžir",
            "Niger",
            "Burkina Faso",
            "Obala Slonovače",
            "Gvineja",
            "Senegal",
            "Mauritanija",
        ],
    ),
    (
        "Mauritanija",
        &["Zapadna Sahara", "Alžir", "Mali", "Senegal"],
    ),
    (
        "Alžir",
        &[
            "Maroko",
            "Zapadna Sahara",
            "Mauritanija",
            "Mali",
            "Niger",
            "Libija",
            "Tunis",
        ],
    ),
    ("Tunis", &["Alžir", "Libija"]),
    ("Maroko", &["Alžir", "Zapadna Sahara"]),
    ("Zapadna Sahara", &["Maroko", "Alžir", "Mauritanija"]),
    (
        "Angola",
        &[
            "Demokratska Republika Kongo",
            "Republika Kongo",
            "Zambija",
            "Namibija",
        ],
    ),
    (
        "Zambija",
        &[
            "Demokratska Republika Kongo",
            "Tanzanija",
            "Malavi",
            "Mozambik",
            "Zimbabve",
            "Bocvana",
            "Namibija",
            "Angola",
        ],
    ),
    ("Malavi", &["Tanzanija", "Mozambik", "Zambija"]),
    (
        "Mozambik",
        &[
            "Tanzanija",
            "Malavi",
            "Zambija",
            "Zimbabve",
            "Južnoafrička Republika",
            "Svazilend",
        ],
    ),
    (
        "Zimbabve",
        &["Zambija", "Mozambik", "Južnoafrička Republika", "Bocvana"],
    ),
    (
        "Bocvana",
        &["Namibija", "Zambija", "Zimbabve", "Južnoafrička Republika"],
    ),
    (
        "Namibija",
        &["Angola", "Zambija", "Bocvana", "Južnoafrička Republika"],
    ),
    (
        "Južnoafrička Republika",
        &[
            "Namibija",
            "Bocvana",
            "Zimbabve",
            "Mozambik",
            "Svazilend",
            "Lesoto",
        ],
    ),
    ("Svazilend", &["Mozambik", "Južnoafrička Republika"]),
    ("Lesoto", &["Južnoafrička Republika"]),
    ("Kuvajt", &["Irak", "Saudijska Arabija"]),
    (
        "Saudijska Arabija",
        &[
            "Jordan",
            "Irak",
            "Kuvajt",
            "Bahrein",
            "Katar",
            "Ujedinjeni Arapski Emirati",
            "Oman",
            "Jemen",
        ],
    ),
    ("Bahrein", &["Saudijska Arabija"]),
    (
        "Katar",
        &["Saudijska Arabija", "Ujedinjeni Arapski Emirati"],
    ),
    (
        "Ujedinjeni Arapski Emirati",
        &["Saudijska Arabija", "Oman", "Katar"],
    ),
    (
        "Oman",
        &["Ujedinjeni Arapski Emirati", "Saudijska Arabija", "Jemen"],
    ),
    ("Jemen", &["Saudijska Arabija", "Oman"]),
];
