pub const LAB_ENG_HELPER: &str = "
                                General notes \n
The virtual lab works with a single flask standing on a hot plate. Volumes are given in mL, \n
temperatures in °C. Substances are picked from the catalog either by their number in the \n
catalog table, by the full name, or by the beginning of the name (case does not matter, the \n
beginning must be unique: 'besi' finds 'Besi (Fe)', 'asam' is ambiguous). \n

                                Filling the flask \n
Every portion is appended to the flask. The color of the mixture is computed portion by \n
portion: the first portion gives the starting color, every next portion is blended with the \n
mixture so far, weighted by the volume of the mixture and the volume of the portion. An empty \n
flask is shown white. One portion may not exceed the 'Max addition' setting (300 mL by \n
default). The flask scale is set by 'Flask capacity'; a fuller flask is drawn full and a \n
warning is logged. \n

                                Reactions \n
'React' takes the FIRST TWO portions of the flask and the current temperature and applies \n
the rules below; the first rule that matches gives the result: \n
1) acid + base -> neutralization (salt and water) \n
2) metal + acid, metal reactivity above 4 -> salt and hydrogen gas \n
3) gas + metal, gas reactivity above 7, temperature above 100 °C -> metal oxide \n
4) salt + salt -> precipitate \n
5) indicator + acid or base -> color change of the indicator \n
6) temperature above 200 °C -> thermal decomposition \n
otherwise nothing is observed. All numbers above are adjustable in Settings. Every reaction \n
is written to the experiment log; cleaning the flask is logged too, the log itself is kept \n
until it is cleared from the log menu. The log can be exported to a JSON file. \n

                                Known reactions \n
A small reference table of real reactions with balanced equations, energy sign, hazards and \n
the protective equipment to wear. A pair is found only when both reagents match exactly, the \n
order of the pair does not matter. \n

                                Settings \n
Settings are stored in lab_config.json in the working directory. Missing fields take their \n
default values. Log level is one of off, error, warn, info, debug, trace and takes effect \n
after restart. \n
";
