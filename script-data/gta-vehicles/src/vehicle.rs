//! The vehicle model identifier table.

use crate::error::{Result, VehicleError};
use std::fmt;
use std::str::FromStr;

/// A vehicle model identifier.
///
/// Each variant names one spawnable vehicle model and carries the
/// precomputed 32-bit hash of its internal model string as its
/// discriminant. The host game resolves models by this hash; scripts
/// refer to them by the symbolic variant name.
///
/// The set is closed and immutable. All 519 active entries of the
/// source table are present, in declaration order, and both names and
/// hash values are unique across the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
#[allow(missing_docs)]
pub enum VehicleHash {
    Adder = 3078201489,
    Airbus = 1283517198,
    Airtug = 1560980623,
    Akuma = 1672195559,
    Alpha = 767087018,
    Ambulance = 1171614426,
    Annihilator = 837858166,
    Apc = 562680400,
    Ardent = 159274291,
    ArmyTanker = 3087536137,
    ArmyTrailer = 2818520053,
    ArmyTrailer2 = 2657817814,
    Asea = 2485144969,
    Asea2 = 2487343317,
    Asterope = 2391954683,
    Avarus = 2179174271,
    Bagger = 2154536131,
    BaleTrailer = 3895125590,
    Baller = 3486135912,
    Baller2 = 142944341,
    Baller3 = 1878062887,
    Baller4 = 634118882,
    Baller5 = 470404958,
    Baller6 = 666166960,
    Banshee = 3253274834,
    Banshee2 = 633712403,
    Barracks = 3471458123,
    Barracks2 = 1074326203,
    Barracks3 = 630371791,
    Bati = 4180675781,
    Bati2 = 3403504941,
    Benson = 2053223216,
    Besra = 1824333165,
    BestiaGTS = 1274868363,
    BF400 = 86520421,
    BfInjection = 1126868326,
    Biff = 850991848,
    Bifta = 3945366167,
    Bison = 4278019151,
    Bison2 = 2072156101,
    Bison3 = 1739845664,
    BJXL = 850565707,
    Blade = 3089165662,
    Blazer = 2166734073,
    Blazer2 = 4246935337,
    Blazer3 = 3025077634,
    Blazer4 = 3854198872,
    Blazer5 = 2704629607,
    Blimp = 4143991942,
    Blimp2 = 3681241380,
    Blista = 3950024287,
    Blista2 = 1039032026,
    Blista3 = 3703315515,
    Bmx = 1131912276,
    BoatTrailer = 524108981,
    BobcatXL = 1069929536,
    Bodhi2 = 2859047862,
    Boxville = 2307837162,
    Boxville2 = 4061868990,
    Boxville3 = 121658888,
    Boxville4 = 444171386,
    Boxville5 = 682434785,
    Brawler = 2815302597,
    Brickade = 3989239879,
    BType = 117401876,
    BType2 = 3463132580,
    BType3 = 3692679425,
    Buccaneer = 3612755468,
    Buccaneer2 = 3281516360,
    Buffalo = 3990165190,
    Buffalo2 = 736902334,
    Buffalo3 = 237764926,
    Bulldozer = 1886712733,
    Bullet = 2598821281,
    Burrito = 2948279460,
    Burrito2 = 3387490166,
    Burrito3 = 2551651283,
    Burrito4 = 893081117,
    Burrito5 = 1132262048,
    Bus = 3581397346,
    Buzzard = 788747387,
    Buzzard2 = 745926877,
    CableCar = 3334677549,
    Caddy = 1147287684,
    Caddy2 = 3757070668,
    Caddy3 = 3525819835,
    Camper = 1876516712,
    Carbonizzare = 2072687711,
    CarbonRS = 11251904,
    Cargobob = 4244420235,
    Cargobob2 = 1621617168,
    Cargobob3 = 1394036463,
    Cargobob4 = 2025593404,
    CargoPlane = 368211810,
    Casco = 941800958,
    Cavalcade = 2006918058,
    Cavalcade2 = 3505073125,
    Cheetah = 2983812512,
    Cheetah2 = 223240013,
    Chimera = 6774487,
    Chino = 349605904,
    Chino2 = 2933279331,
    Cliffhanger = 390201602,
    Coach = 2222034228,
    Cog55 = 906642318,
    Cog552 = 704435172,
    CogCabrio = 330661258,
    Cognoscenti = 2264796000,
    Cognoscenti2 = 3690124666,
    Comet2 = 3249425686,
    Comet3 = 2272483501,
    Contender = 683047626,
    Coquette = 108773431,
    Coquette2 = 1011753235,
    Coquette3 = 784565758,
    Cruiser = 448402357,
    Crusader = 321739290,
    Cuban800 = 3650256867,
    Cutter = 3288047904,
    Daemon = 2006142190,
    Daemon2 = 2890830793,
    Defiler = 822018448,
    Diablous = 4055125828,
    Diablous2 = 1790834270,
    Dilettante = 3164157193,
    Dilettante2 = 1682114128,
    Dinghy = 1033245328,
    Dinghy2 = 276773164,
    Dinghy3 = 509498602,
    Dinghy4 = 867467158,
    DLoader = 1770332643,
    DockTrailer = 2154757102,
    Docktug = 3410276810,
    Dodo = 3393804037,
    Dominator = 80636076,
    Dominator2 = 3379262425,
    Double = 2623969160,
    Dubsta = 1177543287,
    Dubsta2 = 3900892662,
    Dubsta3 = 3057713523,
    Dukes = 723973206,
    Dukes2 = 3968823444,
    Dump = 2164484578,
    Dune = 2633113103,
    Dune2 = 534258863,
    Dune3 = 1897744184,
    Dune4 = 3467805257,
    Dune5 = 3982671785,
    Duster = 970356638,
    Elegy = 196747873,
    Elegy2 = 3728579874,
    Emperor = 3609690755,
    Emperor2 = 2411965148,
    Emperor3 = 3053254478,
    Enduro = 1753414259,
    EntityXF = 3003014393,
    Esskey = 2035069708,
    Exemplar = 4289813342,
    F620 = 3703357000,
    Faction = 2175389151,
    Faction2 = 2504420315,
    Faction3 = 2255212070,
    Faggio = 2452219115,
    Faggio2 = 55628203,
    Faggio3 = 3005788552,
    FBI = 1127131465,
    FBI2 = 2647026068,
    FCR = 627535535,
    FCR2 = 3537231886,
    Felon = 3903372712,
    Felon2 = 4205676014,
    Feltzer2 = 2299640309,
    Feltzer3 = 2728226064,
    FireTruck = 1938952078,
    Fixter = 3458454463,
    Flatbed = 1353720154,
    Forklift = 1491375716,
    FMJ = 1426219628,
    FQ2 = 3157435195,
    Freight = 1030400667,
    FreightCar = 184361638,
    FreightCont1 = 920453016,
    FreightCont2 = 240201337,
    FreightGrain = 642617954,
    FreightTrailer = 3517691494,
    Frogger = 744705981,
    Frogger2 = 1949211328,
    Fugitive = 1909141499,
    Furoregt = 3205927392,
    Fusilade = 499169875,
    Futo = 2016857647,
    Gargoyle = 741090084,
    Gauntlet = 2494797253,
    Gauntlet2 = 349315417,
    GBurrito = 2549763894,
    GBurrito2 = 296357396,
    Glendale = 75131841,
    GP1 = 1234311532,
    GrainTrailer = 1019737494,
    Granger = 2519238556,
    Gresley = 2751205197,
    Guardian = 2186977100,
    Habanero = 884422927,
    Hakuchou = 1265391242,
    Hakuchou2 = 4039289119,
    HalfTrack = 4262731174,
    Handler = 444583674,
    Hauler = 1518533038,
    Hauler2 = 387748548,
    Hexer = 301427732,
    Hotknife = 37348240,
    Huntley = 486987393,
    Hydra = 970385471,
    Infernus = 418536135,
    Infernus2 = 2889029532,
    Ingot = 3005245074,
    Innovation = 4135840458,
    Insurgent = 2434067162,
    Insurgent2 = 2071877360,
    Insurgent3 = 2370534026,
    Intruder = 886934177,
    Issi2 = 3117103977,
    ItaliGTB = 2246633323,
    ItaliGTB2 = 3812247419,
    Jackal = 3670438162,
    JB700 = 1051415893,
    Jester = 2997294755,
    Jester2 = 3188613414,
    Jet = 1058115860,
    Jetmax = 861409633,
    Journey = 4174679674,
    Kalahari = 92612664,
    Khamelion = 544021352,
    Kuruma = 2922118804,
    Kuruma2 = 410882957,
    Landstalker = 1269098716,
    Lazer = 3013282534,
    LE7B = 3062131285,
    Lectro = 640818791,
    Lguard = 469291905,
    Limo2 = 4180339789,
    Lurcher = 2068293287,
    Luxor = 621481054,
    Luxor2 = 3080673438,
    Lynx = 482197771,
    Mamba = 2634021974,
    Mammatus = 2548391185,
    Manana = 2170765704,
    Manchez = 2771538552,
    Marquis = 3251507587,
    Marshall = 1233534620,
    Massacro = 4152024626,
    Massacro2 = 3663206819,
    Maverick = 2634305738,
    Mesa = 914654722,
    Mesa2 = 3546958660,
    Mesa3 = 2230595153,
    MetroTrain = 868868440,
    Miljet = 165154707,
    Minivan = 3984502180,
    Minivan2 = 3168702960,
    Mixer = 3510150843,
    Mixer2 = 475220373,
    Monroe = 3861591579,
    Monster = 3449006043,
    Moonbeam = 525509695,
    Moonbeam2 = 1896491931,
    Mower = 1783355638,
    Mule = 904750859,
    Mule2 = 3244501995,
    Mule3 = 2242229361,
    Nemesis = 3660088182,
    Nero = 1034187331,
    Nero2 = 1093792632,
    Nightblade = 2688780135,
    Nightshade = 2351681756,
    NightShark = 433954513,
    Nimbus = 2999939664,
    Ninef = 1032823388,
    Ninef2 = 2833484545,
    Omnis = 3517794615,
    Oppressor = 884483972,
    Oracle = 1348744438,
    Oracle2 = 3783366066,
    Osiris = 1987142870,
    Packer = 569305213,
    Panto = 3863274624,
    Paradise = 1488164764,
    Patriot = 3486509883,
    PBus = 2287941233,
    PCJ = 3385765638,
    Penetrator = 2536829930,
    Penumbra = 3917501776,
    Peyote = 1830407356,
    Pfister811 = 2465164804,
    Phantom = 2157618379,
    Phantom2 = 2645431192,
    Phantom3 = 177270108,
    Phoenix = 2199527893,
    Picador = 1507916787,
    Pigalle = 1078682497,
    Police = 2046537925,
    Police2 = 2667966721,
    Police3 = 1912215274,
    Police4 = 2321795001,
    Policeb = 4260343491,
    PoliceOld1 = 2758042359,
    PoliceOld2 = 2515846680,
    PoliceT = 456714581,
    Polmav = 353883353,
    Pony = 4175309224,
    Pony2 = 943752001,
    Pounder = 2112052861,
    Prairie = 2844316578,
    Pranger = 741586030,
    Predator = 3806844075,
    Premier = 2411098011,
    Primo = 3144368207,
    Primo2 = 2254540506,
    PropTrailer = 356391690,
    Prototipo = 2123327359,
    Radi = 2643899483,
    RakeTrailer = 390902130,
    RancherXL = 1645267888,
    RancherXL2 = 1933662059,
    RallyTruck = 2191146052,
    RapidGT = 2360515092,
    RapidGT2 = 1737773231,
    Raptor = 3620039993,
    RatBike = 1873600305,
    RatLoader = 3627815886,
    RatLoader2 = 3705788919,
    Reaper = 234062309,
    Rebel = 3087195462,
    Rebel2 = 2249373259,
    Regina = 4280472072,
    RentalBus = 3196165219,
    Rhapsody = 841808271,
    Rhino = 782665360,
    Riot = 3089277354,
    Ripley = 3448987385,
    Rocoto = 2136773105,
    Romero = 627094268,
    Rubble = 2589662668,
    Ruffian = 3401388520,
    Ruiner = 4067225593,
    Ruiner2 = 941494461,
    Ruiner3 = 777714999,
    Rumpo = 1162065741,
    Rumpo2 = 2518351607,
    Rumpo3 = 1475773103,
    Ruston = 719660200,
    SabreGT = 2609945748,
    SabreGT2 = 223258115,
    Sadler = 3695398481,
    Sadler2 = 734217681,
    Sanchez = 788045382,
    Sanchez2 = 2841686334,
    Sanctus = 1491277511,
    Sandking = 3105951696,
    Sandking2 = 989381445,
    Savage = 4212341271,
    Schafter2 = 3039514899,
    Schafter3 = 2809443750,
    Schafter4 = 1489967196,
    Schafter5 = 3406724313,
    Schafter6 = 1922255844,
    Schwarzer = 3548084598,
    Scorcher = 4108429845,
    Scrap = 2594165727,
    Seashark = 3264692260,
    Seashark2 = 3678636260,
    Seashark3 = 3983945033,
    Seminole = 1221512915,
    Sentinel = 1349725314,
    Sentinel2 = 873639469,
    Serrano = 1337041428,
    Seven70 = 2537130571,
    Shamal = 3080461301,
    Sheava = 819197656,
    Sheriff = 2611638396,
    Sheriff2 = 1922257928,
    Shotaro = 3889340782,
    Skylift = 1044954915,
    SlamVan = 729783779,
    SlamVan2 = 833469436,
    SlamVan3 = 1119641113,
    Sovereign = 743478836,
    Specter = 1886268224,
    Specter2 = 1074745671,
    Speeder = 231083307,
    Speeder2 = 437538602,
    Speedo = 3484649228,
    Speedo2 = 728614474,
    Squalo = 400514754,
    Stalion = 1923400478,
    Stalion2 = 3893323758,
    Stanier = 2817386317,
    Stinger = 1545842587,
    StingerGT = 2196019706,
    Stockade = 1747439474,
    Stockade3 = 4080511798,
    Stratum = 1723137093,
    Stretch = 2333339779,
    Stunt = 2172210288,
    Submersible = 771711535,
    Submersible2 = 3228633070,
    Sultan = 970598228,
    SultanRS = 3999278268,
    Suntrap = 4012021193,
    Superd = 1123216662,
    Supervolito = 710198397,
    Supervolito2 = 2623428164,
    Surano = 384071873,
    Surfer = 699456151,
    Surfer2 = 2983726598,
    Surge = 2400073108,
    Swift2 = 1075432268,
    Swift = 3955379698,
    T20 = 1663218586,
    Taco = 1951180813,
    Tailgater = 3286105550,
    Tampa = 972671128,
    Tampa2 = 3223586949,
    Tampa3 = 3084515313,
    Tanker = 3564062519,
    Tanker2 = 1956216962,
    TankerCar = 586013744,
    Taxi = 3338918751,
    Technical = 2198148358,
    Technical2 = 1180875963,
    Technical3 = 1356124575,
    Tempesta = 272929391,
    Thrust = 1836027715,
    TipTruck = 48339065,
    TipTruck2 = 3347205726,
    Titan = 1981688531,
    Torero = 1504306544,
    Tornado = 464687292,
    Tornado2 = 1531094468,
    Tornado3 = 1762279763,
    Tornado4 = 2261744861,
    Tornado5 = 2497353967,
    Tornado6 = 2736567667,
    Toro = 1070967343,
    Toro2 = 908897389,
    Tourbus = 1941029835,
    TowTruck = 2971866336,
    TowTruck2 = 3852654278,
    TR2 = 2078290630,
    TR3 = 1784254509,
    TR4 = 2091594960,
    Tractor = 1641462412,
    Tractor2 = 2218488798,
    Tractor3 = 1445631933,
    TrailerLogs = 2016027501,
    TrailerLarge = 1502869817,
    Trailers = 3417488910,
    Trailers2 = 2715434129,
    Trailers3 = 2236089197,
    Trailers4 = 3194418602,
    TrailerSmall = 712162987,
    TrailerSmall2 = 2413121211,
    Trash = 1917016601,
    Trash2 = 3039269212,
    TRFlat = 2942498482,
    TriBike = 1127861609,
    TriBike2 = 3061159916,
    TriBike3 = 3894672200,
    TrophyTruck = 101905590,
    TrophyTruck2 = 3631668194,
    Tropic = 290013743,
    Tropic2 = 1448677353,
    Tropos = 1887331236,
    Tug = 2194326579,
    Turismor = 408192225,
    Turismo2 = 3312836369,
    TVTrailer = 2524324030,
    Tyrus = 2067820283,
    /// Named `UtilityTruck` in earlier script API releases; the hash
    /// value is unchanged, so saved data using the old name still
    /// resolves to the same model.
    UtilliTruck = 516990260,
    /// Named `UtilityTruck2` in earlier script API releases; the hash
    /// value is unchanged, so saved data using the old name still
    /// resolves to the same model.
    UtilliTruck2 = 887537515,
    /// Named `UtilityTruck3` in earlier script API releases; the hash
    /// value is unchanged, so saved data using the old name still
    /// resolves to the same model.
    UtilliTruck3 = 2132890591,
    Vacca = 338562499,
    Vader = 4154065143,
    Vagner = 1939284556,
    Valkyrie = 2694714877,
    Valkyrie2 = 1543134283,
    Velum = 2621610858,
    Velum2 = 1077420264,
    Verlierer2 = 1102544804,
    Vestra = 1341619767,
    Vigero = 3469130167,
    Vindicator = 2941886209,
    Virgo = 3796912450,
    Virgo2 = 3395457658,
    Virgo3 = 16646064,
    Volatus = 2449479409,
    Voltic = 2672523198,
    Voltic2 = 989294410,
    Voodoo = 2006667053,
    Voodoo2 = 523724515,
    Vortex = 3685342204,
    Warrener = 1373123368,
    Washington = 1777363799,
    Wastelander = 2382949506,
    Windsor = 1581459400,
    Windsor2 = 2364918497,
    Wolfsbane = 3676349299,
    XA21 = 917809321,
    XLS = 1203490606,
    XLS2 = 3862958888,
    Youga = 65402552,
    Youga2 = 1026149675,
    Zentorno = 2891838741,
    Zion = 3172678083,
    Zion2 = 3101863448,
    ZombieA = 3285698347,
    ZombieB = 3724934023,
    ZType = 758895617,
}

impl VehicleHash {
    /// Every identifier in the table, in declaration order.
    pub const ALL: [Self; 519] = [
        Self::Adder,
        Self::Airbus,
        Self::Airtug,
        Self::Akuma,
        Self::Alpha,
        Self::Ambulance,
        Self::Annihilator,
        Self::Apc,
        Self::Ardent,
        Self::ArmyTanker,
        Self::ArmyTrailer,
        Self::ArmyTrailer2,
        Self::Asea,
        Self::Asea2,
        Self::Asterope,
        Self::Avarus,
        Self::Bagger,
        Self::BaleTrailer,
        Self::Baller,
        Self::Baller2,
        Self::Baller3,
        Self::Baller4,
        Self::Baller5,
        Self::Baller6,
        Self::Banshee,
        Self::Banshee2,
        Self::Barracks,
        Self::Barracks2,
        Self::Barracks3,
        Self::Bati,
        Self::Bati2,
        Self::Benson,
        Self::Besra,
        Self::BestiaGTS,
        Self::BF400,
        Self::BfInjection,
        Self::Biff,
        Self::Bifta,
        Self::Bison,
        Self::Bison2,
        Self::Bison3,
        Self::BJXL,
        Self::Blade,
        Self::Blazer,
        Self::Blazer2,
        Self::Blazer3,
        Self::Blazer4,
        Self::Blazer5,
        Self::Blimp,
        Self::Blimp2,
        Self::Blista,
        Self::Blista2,
        Self::Blista3,
        Self::Bmx,
        Self::BoatTrailer,
        Self::BobcatXL,
        Self::Bodhi2,
        Self::Boxville,
        Self::Boxville2,
        Self::Boxville3,
        Self::Boxville4,
        Self::Boxville5,
        Self::Brawler,
        Self::Brickade,
        Self::BType,
        Self::BType2,
        Self::BType3,
        Self::Buccaneer,
        Self::Buccaneer2,
        Self::Buffalo,
        Self::Buffalo2,
        Self::Buffalo3,
        Self::Bulldozer,
        Self::Bullet,
        Self::Burrito,
        Self::Burrito2,
        Self::Burrito3,
        Self::Burrito4,
        Self::Burrito5,
        Self::Bus,
        Self::Buzzard,
        Self::Buzzard2,
        Self::CableCar,
        Self::Caddy,
        Self::Caddy2,
        Self::Caddy3,
        Self::Camper,
        Self::Carbonizzare,
        Self::CarbonRS,
        Self::Cargobob,
        Self::Cargobob2,
        Self::Cargobob3,
        Self::Cargobob4,
        Self::CargoPlane,
        Self::Casco,
        Self::Cavalcade,
        Self::Cavalcade2,
        Self::Cheetah,
        Self::Cheetah2,
        Self::Chimera,
        Self::Chino,
        Self::Chino2,
        Self::Cliffhanger,
        Self::Coach,
        Self::Cog55,
        Self::Cog552,
        Self::CogCabrio,
        Self::Cognoscenti,
        Self::Cognoscenti2,
        Self::Comet2,
        Self::Comet3,
        Self::Contender,
        Self::Coquette,
        Self::Coquette2,
        Self::Coquette3,
        Self::Cruiser,
        Self::Crusader,
        Self::Cuban800,
        Self::Cutter,
        Self::Daemon,
        Self::Daemon2,
        Self::Defiler,
        Self::Diablous,
        Self::Diablous2,
        Self::Dilettante,
        Self::Dilettante2,
        Self::Dinghy,
        Self::Dinghy2,
        Self::Dinghy3,
        Self::Dinghy4,
        Self::DLoader,
        Self::DockTrailer,
        Self::Docktug,
        Self::Dodo,
        Self::Dominator,
        Self::Dominator2,
        Self::Double,
        Self::Dubsta,
        Self::Dubsta2,
        Self::Dubsta3,
        Self::Dukes,
        Self::Dukes2,
        Self::Dump,
        Self::Dune,
        Self::Dune2,
        Self::Dune3,
        Self::Dune4,
        Self::Dune5,
        Self::Duster,
        Self::Elegy,
        Self::Elegy2,
        Self::Emperor,
        Self::Emperor2,
        Self::Emperor3,
        Self::Enduro,
        Self::EntityXF,
        Self::Esskey,
        Self::Exemplar,
        Self::F620,
        Self::Faction,
        Self::Faction2,
        Self::Faction3,
        Self::Faggio,
        Self::Faggio2,
        Self::Faggio3,
        Self::FBI,
        Self::FBI2,
        Self::FCR,
        Self::FCR2,
        Self::Felon,
        Self::Felon2,
        Self::Feltzer2,
        Self::Feltzer3,
        Self::FireTruck,
        Self::Fixter,
        Self::Flatbed,
        Self::Forklift,
        Self::FMJ,
        Self::FQ2,
        Self::Freight,
        Self::FreightCar,
        Self::FreightCont1,
        Self::FreightCont2,
        Self::FreightGrain,
        Self::FreightTrailer,
        Self::Frogger,
        Self::Frogger2,
        Self::Fugitive,
        Self::Furoregt,
        Self::Fusilade,
        Self::Futo,
        Self::Gargoyle,
        Self::Gauntlet,
        Self::Gauntlet2,
        Self::GBurrito,
        Self::GBurrito2,
        Self::Glendale,
        Self::GP1,
        Self::GrainTrailer,
        Self::Granger,
        Self::Gresley,
        Self::Guardian,
        Self::Habanero,
        Self::Hakuchou,
        Self::Hakuchou2,
        Self::HalfTrack,
        Self::Handler,
        Self::Hauler,
        Self::Hauler2,
        Self::Hexer,
        Self::Hotknife,
        Self::Huntley,
        Self::Hydra,
        Self::Infernus,
        Self::Infernus2,
        Self::Ingot,
        Self::Innovation,
        Self::Insurgent,
        Self::Insurgent2,
        Self::Insurgent3,
        Self::Intruder,
        Self::Issi2,
        Self::ItaliGTB,
        Self::ItaliGTB2,
        Self::Jackal,
        Self::JB700,
        Self::Jester,
        Self::Jester2,
        Self::Jet,
        Self::Jetmax,
        Self::Journey,
        Self::Kalahari,
        Self::Khamelion,
        Self::Kuruma,
        Self::Kuruma2,
        Self::Landstalker,
        Self::Lazer,
        Self::LE7B,
        Self::Lectro,
        Self::Lguard,
        Self::Limo2,
        Self::Lurcher,
        Self::Luxor,
        Self::Luxor2,
        Self::Lynx,
        Self::Mamba,
        Self::Mammatus,
        Self::Manana,
        Self::Manchez,
        Self::Marquis,
        Self::Marshall,
        Self::Massacro,
        Self::Massacro2,
        Self::Maverick,
        Self::Mesa,
        Self::Mesa2,
        Self::Mesa3,
        Self::MetroTrain,
        Self::Miljet,
        Self::Minivan,
        Self::Minivan2,
        Self::Mixer,
        Self::Mixer2,
        Self::Monroe,
        Self::Monster,
        Self::Moonbeam,
        Self::Moonbeam2,
        Self::Mower,
        Self::Mule,
        Self::Mule2,
        Self::Mule3,
        Self::Nemesis,
        Self::Nero,
        Self::Nero2,
        Self::Nightblade,
        Self::Nightshade,
        Self::NightShark,
        Self::Nimbus,
        Self::Ninef,
        Self::Ninef2,
        Self::Omnis,
        Self::Oppressor,
        Self::Oracle,
        Self::Oracle2,
        Self::Osiris,
        Self::Packer,
        Self::Panto,
        Self::Paradise,
        Self::Patriot,
        Self::PBus,
        Self::PCJ,
        Self::Penetrator,
        Self::Penumbra,
        Self::Peyote,
        Self::Pfister811,
        Self::Phantom,
        Self::Phantom2,
        Self::Phantom3,
        Self::Phoenix,
        Self::Picador,
        Self::Pigalle,
        Self::Police,
        Self::Police2,
        Self::Police3,
        Self::Police4,
        Self::Policeb,
        Self::PoliceOld1,
        Self::PoliceOld2,
        Self::PoliceT,
        Self::Polmav,
        Self::Pony,
        Self::Pony2,
        Self::Pounder,
        Self::Prairie,
        Self::Pranger,
        Self::Predator,
        Self::Premier,
        Self::Primo,
        Self::Primo2,
        Self::PropTrailer,
        Self::Prototipo,
        Self::Radi,
        Self::RakeTrailer,
        Self::RancherXL,
        Self::RancherXL2,
        Self::RallyTruck,
        Self::RapidGT,
        Self::RapidGT2,
        Self::Raptor,
        Self::RatBike,
        Self::RatLoader,
        Self::RatLoader2,
        Self::Reaper,
        Self::Rebel,
        Self::Rebel2,
        Self::Regina,
        Self::RentalBus,
        Self::Rhapsody,
        Self::Rhino,
        Self::Riot,
        Self::Ripley,
        Self::Rocoto,
        Self::Romero,
        Self::Rubble,
        Self::Ruffian,
        Self::Ruiner,
        Self::Ruiner2,
        Self::Ruiner3,
        Self::Rumpo,
        Self::Rumpo2,
        Self::Rumpo3,
        Self::Ruston,
        Self::SabreGT,
        Self::SabreGT2,
        Self::Sadler,
        Self::Sadler2,
        Self::Sanchez,
        Self::Sanchez2,
        Self::Sanctus,
        Self::Sandking,
        Self::Sandking2,
        Self::Savage,
        Self::Schafter2,
        Self::Schafter3,
        Self::Schafter4,
        Self::Schafter5,
        Self::Schafter6,
        Self::Schwarzer,
        Self::Scorcher,
        Self::Scrap,
        Self::Seashark,
        Self::Seashark2,
        Self::Seashark3,
        Self::Seminole,
        Self::Sentinel,
        Self::Sentinel2,
        Self::Serrano,
        Self::Seven70,
        Self::Shamal,
        Self::Sheava,
        Self::Sheriff,
        Self::Sheriff2,
        Self::Shotaro,
        Self::Skylift,
        Self::SlamVan,
        Self::SlamVan2,
        Self::SlamVan3,
        Self::Sovereign,
        Self::Specter,
        Self::Specter2,
        Self::Speeder,
        Self::Speeder2,
        Self::Speedo,
        Self::Speedo2,
        Self::Squalo,
        Self::Stalion,
        Self::Stalion2,
        Self::Stanier,
        Self::Stinger,
        Self::StingerGT,
        Self::Stockade,
        Self::Stockade3,
        Self::Stratum,
        Self::Stretch,
        Self::Stunt,
        Self::Submersible,
        Self::Submersible2,
        Self::Sultan,
        Self::SultanRS,
        Self::Suntrap,
        Self::Superd,
        Self::Supervolito,
        Self::Supervolito2,
        Self::Surano,
        Self::Surfer,
        Self::Surfer2,
        Self::Surge,
        Self::Swift2,
        Self::Swift,
        Self::T20,
        Self::Taco,
        Self::Tailgater,
        Self::Tampa,
        Self::Tampa2,
        Self::Tampa3,
        Self::Tanker,
        Self::Tanker2,
        Self::TankerCar,
        Self::Taxi,
        Self::Technical,
        Self::Technical2,
        Self::Technical3,
        Self::Tempesta,
        Self::Thrust,
        Self::TipTruck,
        Self::TipTruck2,
        Self::Titan,
        Self::Torero,
        Self::Tornado,
        Self::Tornado2,
        Self::Tornado3,
        Self::Tornado4,
        Self::Tornado5,
        Self::Tornado6,
        Self::Toro,
        Self::Toro2,
        Self::Tourbus,
        Self::TowTruck,
        Self::TowTruck2,
        Self::TR2,
        Self::TR3,
        Self::TR4,
        Self::Tractor,
        Self::Tractor2,
        Self::Tractor3,
        Self::TrailerLogs,
        Self::TrailerLarge,
        Self::Trailers,
        Self::Trailers2,
        Self::Trailers3,
        Self::Trailers4,
        Self::TrailerSmall,
        Self::TrailerSmall2,
        Self::Trash,
        Self::Trash2,
        Self::TRFlat,
        Self::TriBike,
        Self::TriBike2,
        Self::TriBike3,
        Self::TrophyTruck,
        Self::TrophyTruck2,
        Self::Tropic,
        Self::Tropic2,
        Self::Tropos,
        Self::Tug,
        Self::Turismor,
        Self::Turismo2,
        Self::TVTrailer,
        Self::Tyrus,
        Self::UtilliTruck,
        Self::UtilliTruck2,
        Self::UtilliTruck3,
        Self::Vacca,
        Self::Vader,
        Self::Vagner,
        Self::Valkyrie,
        Self::Valkyrie2,
        Self::Velum,
        Self::Velum2,
        Self::Verlierer2,
        Self::Vestra,
        Self::Vigero,
        Self::Vindicator,
        Self::Virgo,
        Self::Virgo2,
        Self::Virgo3,
        Self::Volatus,
        Self::Voltic,
        Self::Voltic2,
        Self::Voodoo,
        Self::Voodoo2,
        Self::Vortex,
        Self::Warrener,
        Self::Washington,
        Self::Wastelander,
        Self::Windsor,
        Self::Windsor2,
        Self::Wolfsbane,
        Self::XA21,
        Self::XLS,
        Self::XLS2,
        Self::Youga,
        Self::Youga2,
        Self::Zentorno,
        Self::Zion,
        Self::Zion2,
        Self::ZombieA,
        Self::ZombieB,
        Self::ZType,
    ];

    /// The 32-bit model hash for this identifier.
    pub const fn hash(self) -> u32 {
        self as u32
    }

    /// The symbolic name for this identifier.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Adder => "Adder",
            Self::Airbus => "Airbus",
            Self::Airtug => "Airtug",
            Self::Akuma => "Akuma",
            Self::Alpha => "Alpha",
            Self::Ambulance => "Ambulance",
            Self::Annihilator => "Annihilator",
            Self::Apc => "Apc",
            Self::Ardent => "Ardent",
            Self::ArmyTanker => "ArmyTanker",
            Self::ArmyTrailer => "ArmyTrailer",
            Self::ArmyTrailer2 => "ArmyTrailer2",
            Self::Asea => "Asea",
            Self::Asea2 => "Asea2",
            Self::Asterope => "Asterope",
            Self::Avarus => "Avarus",
            Self::Bagger => "Bagger",
            Self::BaleTrailer => "BaleTrailer",
            Self::Baller => "Baller",
            Self::Baller2 => "Baller2",
            Self::Baller3 => "Baller3",
            Self::Baller4 => "Baller4",
            Self::Baller5 => "Baller5",
            Self::Baller6 => "Baller6",
            Self::Banshee => "Banshee",
            Self::Banshee2 => "Banshee2",
            Self::Barracks => "Barracks",
            Self::Barracks2 => "Barracks2",
            Self::Barracks3 => "Barracks3",
            Self::Bati => "Bati",
            Self::Bati2 => "Bati2",
            Self::Benson => "Benson",
            Self::Besra => "Besra",
            Self::BestiaGTS => "BestiaGTS",
            Self::BF400 => "BF400",
            Self::BfInjection => "BfInjection",
            Self::Biff => "Biff",
            Self::Bifta => "Bifta",
            Self::Bison => "Bison",
            Self::Bison2 => "Bison2",
            Self::Bison3 => "Bison3",
            Self::BJXL => "BJXL",
            Self::Blade => "Blade",
            Self::Blazer => "Blazer",
            Self::Blazer2 => "Blazer2",
            Self::Blazer3 => "Blazer3",
            Self::Blazer4 => "Blazer4",
            Self::Blazer5 => "Blazer5",
            Self::Blimp => "Blimp",
            Self::Blimp2 => "Blimp2",
            Self::Blista => "Blista",
            Self::Blista2 => "Blista2",
            Self::Blista3 => "Blista3",
            Self::Bmx => "Bmx",
            Self::BoatTrailer => "BoatTrailer",
            Self::BobcatXL => "BobcatXL",
            Self::Bodhi2 => "Bodhi2",
            Self::Boxville => "Boxville",
            Self::Boxville2 => "Boxville2",
            Self::Boxville3 => "Boxville3",
            Self::Boxville4 => "Boxville4",
            Self::Boxville5 => "Boxville5",
            Self::Brawler => "Brawler",
            Self::Brickade => "Brickade",
            Self::BType => "BType",
            Self::BType2 => "BType2",
            Self::BType3 => "BType3",
            Self::Buccaneer => "Buccaneer",
            Self::Buccaneer2 => "Buccaneer2",
            Self::Buffalo => "Buffalo",
            Self::Buffalo2 => "Buffalo2",
            Self::Buffalo3 => "Buffalo3",
            Self::Bulldozer => "Bulldozer",
            Self::Bullet => "Bullet",
            Self::Burrito => "Burrito",
            Self::Burrito2 => "Burrito2",
            Self::Burrito3 => "Burrito3",
            Self::Burrito4 => "Burrito4",
            Self::Burrito5 => "Burrito5",
            Self::Bus => "Bus",
            Self::Buzzard => "Buzzard",
            Self::Buzzard2 => "Buzzard2",
            Self::CableCar => "CableCar",
            Self::Caddy => "Caddy",
            Self::Caddy2 => "Caddy2",
            Self::Caddy3 => "Caddy3",
            Self::Camper => "Camper",
            Self::Carbonizzare => "Carbonizzare",
            Self::CarbonRS => "CarbonRS",
            Self::Cargobob => "Cargobob",
            Self::Cargobob2 => "Cargobob2",
            Self::Cargobob3 => "Cargobob3",
            Self::Cargobob4 => "Cargobob4",
            Self::CargoPlane => "CargoPlane",
            Self::Casco => "Casco",
            Self::Cavalcade => "Cavalcade",
            Self::Cavalcade2 => "Cavalcade2",
            Self::Cheetah => "Cheetah",
            Self::Cheetah2 => "Cheetah2",
            Self::Chimera => "Chimera",
            Self::Chino => "Chino",
            Self::Chino2 => "Chino2",
            Self::Cliffhanger => "Cliffhanger",
            Self::Coach => "Coach",
            Self::Cog55 => "Cog55",
            Self::Cog552 => "Cog552",
            Self::CogCabrio => "CogCabrio",
            Self::Cognoscenti => "Cognoscenti",
            Self::Cognoscenti2 => "Cognoscenti2",
            Self::Comet2 => "Comet2",
            Self::Comet3 => "Comet3",
            Self::Contender => "Contender",
            Self::Coquette => "Coquette",
            Self::Coquette2 => "Coquette2",
            Self::Coquette3 => "Coquette3",
            Self::Cruiser => "Cruiser",
            Self::Crusader => "Crusader",
            Self::Cuban800 => "Cuban800",
            Self::Cutter => "Cutter",
            Self::Daemon => "Daemon",
            Self::Daemon2 => "Daemon2",
            Self::Defiler => "Defiler",
            Self::Diablous => "Diablous",
            Self::Diablous2 => "Diablous2",
            Self::Dilettante => "Dilettante",
            Self::Dilettante2 => "Dilettante2",
            Self::Dinghy => "Dinghy",
            Self::Dinghy2 => "Dinghy2",
            Self::Dinghy3 => "Dinghy3",
            Self::Dinghy4 => "Dinghy4",
            Self::DLoader => "DLoader",
            Self::DockTrailer => "DockTrailer",
            Self::Docktug => "Docktug",
            Self::Dodo => "Dodo",
            Self::Dominator => "Dominator",
            Self::Dominator2 => "Dominator2",
            Self::Double => "Double",
            Self::Dubsta => "Dubsta",
            Self::Dubsta2 => "Dubsta2",
            Self::Dubsta3 => "Dubsta3",
            Self::Dukes => "Dukes",
            Self::Dukes2 => "Dukes2",
            Self::Dump => "Dump",
            Self::Dune => "Dune",
            Self::Dune2 => "Dune2",
            Self::Dune3 => "Dune3",
            Self::Dune4 => "Dune4",
            Self::Dune5 => "Dune5",
            Self::Duster => "Duster",
            Self::Elegy => "Elegy",
            Self::Elegy2 => "Elegy2",
            Self::Emperor => "Emperor",
            Self::Emperor2 => "Emperor2",
            Self::Emperor3 => "Emperor3",
            Self::Enduro => "Enduro",
            Self::EntityXF => "EntityXF",
            Self::Esskey => "Esskey",
            Self::Exemplar => "Exemplar",
            Self::F620 => "F620",
            Self::Faction => "Faction",
            Self::Faction2 => "Faction2",
            Self::Faction3 => "Faction3",
            Self::Faggio => "Faggio",
            Self::Faggio2 => "Faggio2",
            Self::Faggio3 => "Faggio3",
            Self::FBI => "FBI",
            Self::FBI2 => "FBI2",
            Self::FCR => "FCR",
            Self::FCR2 => "FCR2",
            Self::Felon => "Felon",
            Self::Felon2 => "Felon2",
            Self::Feltzer2 => "Feltzer2",
            Self::Feltzer3 => "Feltzer3",
            Self::FireTruck => "FireTruck",
            Self::Fixter => "Fixter",
            Self::Flatbed => "Flatbed",
            Self::Forklift => "Forklift",
            Self::FMJ => "FMJ",
            Self::FQ2 => "FQ2",
            Self::Freight => "Freight",
            Self::FreightCar => "FreightCar",
            Self::FreightCont1 => "FreightCont1",
            Self::FreightCont2 => "FreightCont2",
            Self::FreightGrain => "FreightGrain",
            Self::FreightTrailer => "FreightTrailer",
            Self::Frogger => "Frogger",
            Self::Frogger2 => "Frogger2",
            Self::Fugitive => "Fugitive",
            Self::Furoregt => "Furoregt",
            Self::Fusilade => "Fusilade",
            Self::Futo => "Futo",
            Self::Gargoyle => "Gargoyle",
            Self::Gauntlet => "Gauntlet",
            Self::Gauntlet2 => "Gauntlet2",
            Self::GBurrito => "GBurrito",
            Self::GBurrito2 => "GBurrito2",
            Self::Glendale => "Glendale",
            Self::GP1 => "GP1",
            Self::GrainTrailer => "GrainTrailer",
            Self::Granger => "Granger",
            Self::Gresley => "Gresley",
            Self::Guardian => "Guardian",
            Self::Habanero => "Habanero",
            Self::Hakuchou => "Hakuchou",
            Self::Hakuchou2 => "Hakuchou2",
            Self::HalfTrack => "HalfTrack",
            Self::Handler => "Handler",
            Self::Hauler => "Hauler",
            Self::Hauler2 => "Hauler2",
            Self::Hexer => "Hexer",
            Self::Hotknife => "Hotknife",
            Self::Huntley => "Huntley",
            Self::Hydra => "Hydra",
            Self::Infernus => "Infernus",
            Self::Infernus2 => "Infernus2",
            Self::Ingot => "Ingot",
            Self::Innovation => "Innovation",
            Self::Insurgent => "Insurgent",
            Self::Insurgent2 => "Insurgent2",
            Self::Insurgent3 => "Insurgent3",
            Self::Intruder => "Intruder",
            Self::Issi2 => "Issi2",
            Self::ItaliGTB => "ItaliGTB",
            Self::ItaliGTB2 => "ItaliGTB2",
            Self::Jackal => "Jackal",
            Self::JB700 => "JB700",
            Self::Jester => "Jester",
            Self::Jester2 => "Jester2",
            Self::Jet => "Jet",
            Self::Jetmax => "Jetmax",
            Self::Journey => "Journey",
            Self::Kalahari => "Kalahari",
            Self::Khamelion => "Khamelion",
            Self::Kuruma => "Kuruma",
            Self::Kuruma2 => "Kuruma2",
            Self::Landstalker => "Landstalker",
            Self::Lazer => "Lazer",
            Self::LE7B => "LE7B",
            Self::Lectro => "Lectro",
            Self::Lguard => "Lguard",
            Self::Limo2 => "Limo2",
            Self::Lurcher => "Lurcher",
            Self::Luxor => "Luxor",
            Self::Luxor2 => "Luxor2",
            Self::Lynx => "Lynx",
            Self::Mamba => "Mamba",
            Self::Mammatus => "Mammatus",
            Self::Manana => "Manana",
            Self::Manchez => "Manchez",
            Self::Marquis => "Marquis",
            Self::Marshall => "Marshall",
            Self::Massacro => "Massacro",
            Self::Massacro2 => "Massacro2",
            Self::Maverick => "Maverick",
            Self::Mesa => "Mesa",
            Self::Mesa2 => "Mesa2",
            Self::Mesa3 => "Mesa3",
            Self::MetroTrain => "MetroTrain",
            Self::Miljet => "Miljet",
            Self::Minivan => "Minivan",
            Self::Minivan2 => "Minivan2",
            Self::Mixer => "Mixer",
            Self::Mixer2 => "Mixer2",
            Self::Monroe => "Monroe",
            Self::Monster => "Monster",
            Self::Moonbeam => "Moonbeam",
            Self::Moonbeam2 => "Moonbeam2",
            Self::Mower => "Mower",
            Self::Mule => "Mule",
            Self::Mule2 => "Mule2",
            Self::Mule3 => "Mule3",
            Self::Nemesis => "Nemesis",
            Self::Nero => "Nero",
            Self::Nero2 => "Nero2",
            Self::Nightblade => "Nightblade",
            Self::Nightshade => "Nightshade",
            Self::NightShark => "NightShark",
            Self::Nimbus => "Nimbus",
            Self::Ninef => "Ninef",
            Self::Ninef2 => "Ninef2",
            Self::Omnis => "Omnis",
            Self::Oppressor => "Oppressor",
            Self::Oracle => "Oracle",
            Self::Oracle2 => "Oracle2",
            Self::Osiris => "Osiris",
            Self::Packer => "Packer",
            Self::Panto => "Panto",
            Self::Paradise => "Paradise",
            Self::Patriot => "Patriot",
            Self::PBus => "PBus",
            Self::PCJ => "PCJ",
            Self::Penetrator => "Penetrator",
            Self::Penumbra => "Penumbra",
            Self::Peyote => "Peyote",
            Self::Pfister811 => "Pfister811",
            Self::Phantom => "Phantom",
            Self::Phantom2 => "Phantom2",
            Self::Phantom3 => "Phantom3",
            Self::Phoenix => "Phoenix",
            Self::Picador => "Picador",
            Self::Pigalle => "Pigalle",
            Self::Police => "Police",
            Self::Police2 => "Police2",
            Self::Police3 => "Police3",
            Self::Police4 => "Police4",
            Self::Policeb => "Policeb",
            Self::PoliceOld1 => "PoliceOld1",
            Self::PoliceOld2 => "PoliceOld2",
            Self::PoliceT => "PoliceT",
            Self::Polmav => "Polmav",
            Self::Pony => "Pony",
            Self::Pony2 => "Pony2",
            Self::Pounder => "Pounder",
            Self::Prairie => "Prairie",
            Self::Pranger => "Pranger",
            Self::Predator => "Predator",
            Self::Premier => "Premier",
            Self::Primo => "Primo",
            Self::Primo2 => "Primo2",
            Self::PropTrailer => "PropTrailer",
            Self::Prototipo => "Prototipo",
            Self::Radi => "Radi",
            Self::RakeTrailer => "RakeTrailer",
            Self::RancherXL => "RancherXL",
            Self::RancherXL2 => "RancherXL2",
            Self::RallyTruck => "RallyTruck",
            Self::RapidGT => "RapidGT",
            Self::RapidGT2 => "RapidGT2",
            Self::Raptor => "Raptor",
            Self::RatBike => "RatBike",
            Self::RatLoader => "RatLoader",
            Self::RatLoader2 => "RatLoader2",
            Self::Reaper => "Reaper",
            Self::Rebel => "Rebel",
            Self::Rebel2 => "Rebel2",
            Self::Regina => "Regina",
            Self::RentalBus => "RentalBus",
            Self::Rhapsody => "Rhapsody",
            Self::Rhino => "Rhino",
            Self::Riot => "Riot",
            Self::Ripley => "Ripley",
            Self::Rocoto => "Rocoto",
            Self::Romero => "Romero",
            Self::Rubble => "Rubble",
            Self::Ruffian => "Ruffian",
            Self::Ruiner => "Ruiner",
            Self::Ruiner2 => "Ruiner2",
            Self::Ruiner3 => "Ruiner3",
            Self::Rumpo => "Rumpo",
            Self::Rumpo2 => "Rumpo2",
            Self::Rumpo3 => "Rumpo3",
            Self::Ruston => "Ruston",
            Self::SabreGT => "SabreGT",
            Self::SabreGT2 => "SabreGT2",
            Self::Sadler => "Sadler",
            Self::Sadler2 => "Sadler2",
            Self::Sanchez => "Sanchez",
            Self::Sanchez2 => "Sanchez2",
            Self::Sanctus => "Sanctus",
            Self::Sandking => "Sandking",
            Self::Sandking2 => "Sandking2",
            Self::Savage => "Savage",
            Self::Schafter2 => "Schafter2",
            Self::Schafter3 => "Schafter3",
            Self::Schafter4 => "Schafter4",
            Self::Schafter5 => "Schafter5",
            Self::Schafter6 => "Schafter6",
            Self::Schwarzer => "Schwarzer",
            Self::Scorcher => "Scorcher",
            Self::Scrap => "Scrap",
            Self::Seashark => "Seashark",
            Self::Seashark2 => "Seashark2",
            Self::Seashark3 => "Seashark3",
            Self::Seminole => "Seminole",
            Self::Sentinel => "Sentinel",
            Self::Sentinel2 => "Sentinel2",
            Self::Serrano => "Serrano",
            Self::Seven70 => "Seven70",
            Self::Shamal => "Shamal",
            Self::Sheava => "Sheava",
            Self::Sheriff => "Sheriff",
            Self::Sheriff2 => "Sheriff2",
            Self::Shotaro => "Shotaro",
            Self::Skylift => "Skylift",
            Self::SlamVan => "SlamVan",
            Self::SlamVan2 => "SlamVan2",
            Self::SlamVan3 => "SlamVan3",
            Self::Sovereign => "Sovereign",
            Self::Specter => "Specter",
            Self::Specter2 => "Specter2",
            Self::Speeder => "Speeder",
            Self::Speeder2 => "Speeder2",
            Self::Speedo => "Speedo",
            Self::Speedo2 => "Speedo2",
            Self::Squalo => "Squalo",
            Self::Stalion => "Stalion",
            Self::Stalion2 => "Stalion2",
            Self::Stanier => "Stanier",
            Self::Stinger => "Stinger",
            Self::StingerGT => "StingerGT",
            Self::Stockade => "Stockade",
            Self::Stockade3 => "Stockade3",
            Self::Stratum => "Stratum",
            Self::Stretch => "Stretch",
            Self::Stunt => "Stunt",
            Self::Submersible => "Submersible",
            Self::Submersible2 => "Submersible2",
            Self::Sultan => "Sultan",
            Self::SultanRS => "SultanRS",
            Self::Suntrap => "Suntrap",
            Self::Superd => "Superd",
            Self::Supervolito => "Supervolito",
            Self::Supervolito2 => "Supervolito2",
            Self::Surano => "Surano",
            Self::Surfer => "Surfer",
            Self::Surfer2 => "Surfer2",
            Self::Surge => "Surge",
            Self::Swift2 => "Swift2",
            Self::Swift => "Swift",
            Self::T20 => "T20",
            Self::Taco => "Taco",
            Self::Tailgater => "Tailgater",
            Self::Tampa => "Tampa",
            Self::Tampa2 => "Tampa2",
            Self::Tampa3 => "Tampa3",
            Self::Tanker => "Tanker",
            Self::Tanker2 => "Tanker2",
            Self::TankerCar => "TankerCar",
            Self::Taxi => "Taxi",
            Self::Technical => "Technical",
            Self::Technical2 => "Technical2",
            Self::Technical3 => "Technical3",
            Self::Tempesta => "Tempesta",
            Self::Thrust => "Thrust",
            Self::TipTruck => "TipTruck",
            Self::TipTruck2 => "TipTruck2",
            Self::Titan => "Titan",
            Self::Torero => "Torero",
            Self::Tornado => "Tornado",
            Self::Tornado2 => "Tornado2",
            Self::Tornado3 => "Tornado3",
            Self::Tornado4 => "Tornado4",
            Self::Tornado5 => "Tornado5",
            Self::Tornado6 => "Tornado6",
            Self::Toro => "Toro",
            Self::Toro2 => "Toro2",
            Self::Tourbus => "Tourbus",
            Self::TowTruck => "TowTruck",
            Self::TowTruck2 => "TowTruck2",
            Self::TR2 => "TR2",
            Self::TR3 => "TR3",
            Self::TR4 => "TR4",
            Self::Tractor => "Tractor",
            Self::Tractor2 => "Tractor2",
            Self::Tractor3 => "Tractor3",
            Self::TrailerLogs => "TrailerLogs",
            Self::TrailerLarge => "TrailerLarge",
            Self::Trailers => "Trailers",
            Self::Trailers2 => "Trailers2",
            Self::Trailers3 => "Trailers3",
            Self::Trailers4 => "Trailers4",
            Self::TrailerSmall => "TrailerSmall",
            Self::TrailerSmall2 => "TrailerSmall2",
            Self::Trash => "Trash",
            Self::Trash2 => "Trash2",
            Self::TRFlat => "TRFlat",
            Self::TriBike => "TriBike",
            Self::TriBike2 => "TriBike2",
            Self::TriBike3 => "TriBike3",
            Self::TrophyTruck => "TrophyTruck",
            Self::TrophyTruck2 => "TrophyTruck2",
            Self::Tropic => "Tropic",
            Self::Tropic2 => "Tropic2",
            Self::Tropos => "Tropos",
            Self::Tug => "Tug",
            Self::Turismor => "Turismor",
            Self::Turismo2 => "Turismo2",
            Self::TVTrailer => "TVTrailer",
            Self::Tyrus => "Tyrus",
            Self::UtilliTruck => "UtilliTruck",
            Self::UtilliTruck2 => "UtilliTruck2",
            Self::UtilliTruck3 => "UtilliTruck3",
            Self::Vacca => "Vacca",
            Self::Vader => "Vader",
            Self::Vagner => "Vagner",
            Self::Valkyrie => "Valkyrie",
            Self::Valkyrie2 => "Valkyrie2",
            Self::Velum => "Velum",
            Self::Velum2 => "Velum2",
            Self::Verlierer2 => "Verlierer2",
            Self::Vestra => "Vestra",
            Self::Vigero => "Vigero",
            Self::Vindicator => "Vindicator",
            Self::Virgo => "Virgo",
            Self::Virgo2 => "Virgo2",
            Self::Virgo3 => "Virgo3",
            Self::Volatus => "Volatus",
            Self::Voltic => "Voltic",
            Self::Voltic2 => "Voltic2",
            Self::Voodoo => "Voodoo",
            Self::Voodoo2 => "Voodoo2",
            Self::Vortex => "Vortex",
            Self::Warrener => "Warrener",
            Self::Washington => "Washington",
            Self::Wastelander => "Wastelander",
            Self::Windsor => "Windsor",
            Self::Windsor2 => "Windsor2",
            Self::Wolfsbane => "Wolfsbane",
            Self::XA21 => "XA21",
            Self::XLS => "XLS",
            Self::XLS2 => "XLS2",
            Self::Youga => "Youga",
            Self::Youga2 => "Youga2",
            Self::Zentorno => "Zentorno",
            Self::Zion => "Zion",
            Self::Zion2 => "Zion2",
            Self::ZombieA => "ZombieA",
            Self::ZombieB => "ZombieB",
            Self::ZType => "ZType",
        }
    }

    /// Looks up an identifier by symbolic name.
    ///
    /// Matches the declared name exactly first, then falls back to an
    /// ASCII-case-insensitive scan, since model names are
    /// case-insensitive in the host game. Retired names from the
    /// `UtilityTruck` rename are accepted and resolve to their
    /// `UtilliTruck` successors.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_name_exact(name).or_else(|| {
            Self::ALL
                .iter()
                .copied()
                .find(|v| v.name().eq_ignore_ascii_case(name))
        })
    }

    fn from_name_exact(name: &str) -> Option<Self> {
        match name {
            "Adder" => Some(Self::Adder),
            "Airbus" => Some(Self::Airbus),
            "Airtug" => Some(Self::Airtug),
            "Akuma" => Some(Self::Akuma),
            "Alpha" => Some(Self::Alpha),
            "Ambulance" => Some(Self::Ambulance),
            "Annihilator" => Some(Self::Annihilator),
            "Apc" => Some(Self::Apc),
            "Ardent" => Some(Self::Ardent),
            "ArmyTanker" => Some(Self::ArmyTanker),
            "ArmyTrailer" => Some(Self::ArmyTrailer),
            "ArmyTrailer2" => Some(Self::ArmyTrailer2),
            "Asea" => Some(Self::Asea),
            "Asea2" => Some(Self::Asea2),
            "Asterope" => Some(Self::Asterope),
            "Avarus" => Some(Self::Avarus),
            "Bagger" => Some(Self::Bagger),
            "BaleTrailer" => Some(Self::BaleTrailer),
            "Baller" => Some(Self::Baller),
            "Baller2" => Some(Self::Baller2),
            "Baller3" => Some(Self::Baller3),
            "Baller4" => Some(Self::Baller4),
            "Baller5" => Some(Self::Baller5),
            "Baller6" => Some(Self::Baller6),
            "Banshee" => Some(Self::Banshee),
            "Banshee2" => Some(Self::Banshee2),
            "Barracks" => Some(Self::Barracks),
            "Barracks2" => Some(Self::Barracks2),
            "Barracks3" => Some(Self::Barracks3),
            "Bati" => Some(Self::Bati),
            "Bati2" => Some(Self::Bati2),
            "Benson" => Some(Self::Benson),
            "Besra" => Some(Self::Besra),
            "BestiaGTS" => Some(Self::BestiaGTS),
            "BF400" => Some(Self::BF400),
            "BfInjection" => Some(Self::BfInjection),
            "Biff" => Some(Self::Biff),
            "Bifta" => Some(Self::Bifta),
            "Bison" => Some(Self::Bison),
            "Bison2" => Some(Self::Bison2),
            "Bison3" => Some(Self::Bison3),
            "BJXL" => Some(Self::BJXL),
            "Blade" => Some(Self::Blade),
            "Blazer" => Some(Self::Blazer),
            "Blazer2" => Some(Self::Blazer2),
            "Blazer3" => Some(Self::Blazer3),
            "Blazer4" => Some(Self::Blazer4),
            "Blazer5" => Some(Self::Blazer5),
            "Blimp" => Some(Self::Blimp),
            "Blimp2" => Some(Self::Blimp2),
            "Blista" => Some(Self::Blista),
            "Blista2" => Some(Self::Blista2),
            "Blista3" => Some(Self::Blista3),
            "Bmx" => Some(Self::Bmx),
            "BoatTrailer" => Some(Self::BoatTrailer),
            "BobcatXL" => Some(Self::BobcatXL),
            "Bodhi2" => Some(Self::Bodhi2),
            "Boxville" => Some(Self::Boxville),
            "Boxville2" => Some(Self::Boxville2),
            "Boxville3" => Some(Self::Boxville3),
            "Boxville4" => Some(Self::Boxville4),
            "Boxville5" => Some(Self::Boxville5),
            "Brawler" => Some(Self::Brawler),
            "Brickade" => Some(Self::Brickade),
            "BType" => Some(Self::BType),
            "BType2" => Some(Self::BType2),
            "BType3" => Some(Self::BType3),
            "Buccaneer" => Some(Self::Buccaneer),
            "Buccaneer2" => Some(Self::Buccaneer2),
            "Buffalo" => Some(Self::Buffalo),
            "Buffalo2" => Some(Self::Buffalo2),
            "Buffalo3" => Some(Self::Buffalo3),
            "Bulldozer" => Some(Self::Bulldozer),
            "Bullet" => Some(Self::Bullet),
            "Burrito" => Some(Self::Burrito),
            "Burrito2" => Some(Self::Burrito2),
            "Burrito3" => Some(Self::Burrito3),
            "Burrito4" => Some(Self::Burrito4),
            "Burrito5" => Some(Self::Burrito5),
            "Bus" => Some(Self::Bus),
            "Buzzard" => Some(Self::Buzzard),
            "Buzzard2" => Some(Self::Buzzard2),
            "CableCar" => Some(Self::CableCar),
            "Caddy" => Some(Self::Caddy),
            "Caddy2" => Some(Self::Caddy2),
            "Caddy3" => Some(Self::Caddy3),
            "Camper" => Some(Self::Camper),
            "Carbonizzare" => Some(Self::Carbonizzare),
            "CarbonRS" => Some(Self::CarbonRS),
            "Cargobob" => Some(Self::Cargobob),
            "Cargobob2" => Some(Self::Cargobob2),
            "Cargobob3" => Some(Self::Cargobob3),
            "Cargobob4" => Some(Self::Cargobob4),
            "CargoPlane" => Some(Self::CargoPlane),
            "Casco" => Some(Self::Casco),
            "Cavalcade" => Some(Self::Cavalcade),
            "Cavalcade2" => Some(Self::Cavalcade2),
            "Cheetah" => Some(Self::Cheetah),
            "Cheetah2" => Some(Self::Cheetah2),
            "Chimera" => Some(Self::Chimera),
            "Chino" => Some(Self::Chino),
            "Chino2" => Some(Self::Chino2),
            "Cliffhanger" => Some(Self::Cliffhanger),
            "Coach" => Some(Self::Coach),
            "Cog55" => Some(Self::Cog55),
            "Cog552" => Some(Self::Cog552),
            "CogCabrio" => Some(Self::CogCabrio),
            "Cognoscenti" => Some(Self::Cognoscenti),
            "Cognoscenti2" => Some(Self::Cognoscenti2),
            "Comet2" => Some(Self::Comet2),
            "Comet3" => Some(Self::Comet3),
            "Contender" => Some(Self::Contender),
            "Coquette" => Some(Self::Coquette),
            "Coquette2" => Some(Self::Coquette2),
            "Coquette3" => Some(Self::Coquette3),
            "Cruiser" => Some(Self::Cruiser),
            "Crusader" => Some(Self::Crusader),
            "Cuban800" => Some(Self::Cuban800),
            "Cutter" => Some(Self::Cutter),
            "Daemon" => Some(Self::Daemon),
            "Daemon2" => Some(Self::Daemon2),
            "Defiler" => Some(Self::Defiler),
            "Diablous" => Some(Self::Diablous),
            "Diablous2" => Some(Self::Diablous2),
            "Dilettante" => Some(Self::Dilettante),
            "Dilettante2" => Some(Self::Dilettante2),
            "Dinghy" => Some(Self::Dinghy),
            "Dinghy2" => Some(Self::Dinghy2),
            "Dinghy3" => Some(Self::Dinghy3),
            "Dinghy4" => Some(Self::Dinghy4),
            "DLoader" => Some(Self::DLoader),
            "DockTrailer" => Some(Self::DockTrailer),
            "Docktug" => Some(Self::Docktug),
            "Dodo" => Some(Self::Dodo),
            "Dominator" => Some(Self::Dominator),
            "Dominator2" => Some(Self::Dominator2),
            "Double" => Some(Self::Double),
            "Dubsta" => Some(Self::Dubsta),
            "Dubsta2" => Some(Self::Dubsta2),
            "Dubsta3" => Some(Self::Dubsta3),
            "Dukes" => Some(Self::Dukes),
            "Dukes2" => Some(Self::Dukes2),
            "Dump" => Some(Self::Dump),
            "Dune" => Some(Self::Dune),
            "Dune2" => Some(Self::Dune2),
            "Dune3" => Some(Self::Dune3),
            "Dune4" => Some(Self::Dune4),
            "Dune5" => Some(Self::Dune5),
            "Duster" => Some(Self::Duster),
            "Elegy" => Some(Self::Elegy),
            "Elegy2" => Some(Self::Elegy2),
            "Emperor" => Some(Self::Emperor),
            "Emperor2" => Some(Self::Emperor2),
            "Emperor3" => Some(Self::Emperor3),
            "Enduro" => Some(Self::Enduro),
            "EntityXF" => Some(Self::EntityXF),
            "Esskey" => Some(Self::Esskey),
            "Exemplar" => Some(Self::Exemplar),
            "F620" => Some(Self::F620),
            "Faction" => Some(Self::Faction),
            "Faction2" => Some(Self::Faction2),
            "Faction3" => Some(Self::Faction3),
            "Faggio" => Some(Self::Faggio),
            "Faggio2" => Some(Self::Faggio2),
            "Faggio3" => Some(Self::Faggio3),
            "FBI" => Some(Self::FBI),
            "FBI2" => Some(Self::FBI2),
            "FCR" => Some(Self::FCR),
            "FCR2" => Some(Self::FCR2),
            "Felon" => Some(Self::Felon),
            "Felon2" => Some(Self::Felon2),
            "Feltzer2" => Some(Self::Feltzer2),
            "Feltzer3" => Some(Self::Feltzer3),
            "FireTruck" => Some(Self::FireTruck),
            "Fixter" => Some(Self::Fixter),
            "Flatbed" => Some(Self::Flatbed),
            "Forklift" => Some(Self::Forklift),
            "FMJ" => Some(Self::FMJ),
            "FQ2" => Some(Self::FQ2),
            "Freight" => Some(Self::Freight),
            "FreightCar" => Some(Self::FreightCar),
            "FreightCont1" => Some(Self::FreightCont1),
            "FreightCont2" => Some(Self::FreightCont2),
            "FreightGrain" => Some(Self::FreightGrain),
            "FreightTrailer" => Some(Self::FreightTrailer),
            "Frogger" => Some(Self::Frogger),
            "Frogger2" => Some(Self::Frogger2),
            "Fugitive" => Some(Self::Fugitive),
            "Furoregt" => Some(Self::Furoregt),
            "Fusilade" => Some(Self::Fusilade),
            "Futo" => Some(Self::Futo),
            "Gargoyle" => Some(Self::Gargoyle),
            "Gauntlet" => Some(Self::Gauntlet),
            "Gauntlet2" => Some(Self::Gauntlet2),
            "GBurrito" => Some(Self::GBurrito),
            "GBurrito2" => Some(Self::GBurrito2),
            "Glendale" => Some(Self::Glendale),
            "GP1" => Some(Self::GP1),
            "GrainTrailer" => Some(Self::GrainTrailer),
            "Granger" => Some(Self::Granger),
            "Gresley" => Some(Self::Gresley),
            "Guardian" => Some(Self::Guardian),
            "Habanero" => Some(Self::Habanero),
            "Hakuchou" => Some(Self::Hakuchou),
            "Hakuchou2" => Some(Self::Hakuchou2),
            "HalfTrack" => Some(Self::HalfTrack),
            "Handler" => Some(Self::Handler),
            "Hauler" => Some(Self::Hauler),
            "Hauler2" => Some(Self::Hauler2),
            "Hexer" => Some(Self::Hexer),
            "Hotknife" => Some(Self::Hotknife),
            "Huntley" => Some(Self::Huntley),
            "Hydra" => Some(Self::Hydra),
            "Infernus" => Some(Self::Infernus),
            "Infernus2" => Some(Self::Infernus2),
            "Ingot" => Some(Self::Ingot),
            "Innovation" => Some(Self::Innovation),
            "Insurgent" => Some(Self::Insurgent),
            "Insurgent2" => Some(Self::Insurgent2),
            "Insurgent3" => Some(Self::Insurgent3),
            "Intruder" => Some(Self::Intruder),
            "Issi2" => Some(Self::Issi2),
            "ItaliGTB" => Some(Self::ItaliGTB),
            "ItaliGTB2" => Some(Self::ItaliGTB2),
            "Jackal" => Some(Self::Jackal),
            "JB700" => Some(Self::JB700),
            "Jester" => Some(Self::Jester),
            "Jester2" => Some(Self::Jester2),
            "Jet" => Some(Self::Jet),
            "Jetmax" => Some(Self::Jetmax),
            "Journey" => Some(Self::Journey),
            "Kalahari" => Some(Self::Kalahari),
            "Khamelion" => Some(Self::Khamelion),
            "Kuruma" => Some(Self::Kuruma),
            "Kuruma2" => Some(Self::Kuruma2),
            "Landstalker" => Some(Self::Landstalker),
            "Lazer" => Some(Self::Lazer),
            "LE7B" => Some(Self::LE7B),
            "Lectro" => Some(Self::Lectro),
            "Lguard" => Some(Self::Lguard),
            "Limo2" => Some(Self::Limo2),
            "Lurcher" => Some(Self::Lurcher),
            "Luxor" => Some(Self::Luxor),
            "Luxor2" => Some(Self::Luxor2),
            "Lynx" => Some(Self::Lynx),
            "Mamba" => Some(Self::Mamba),
            "Mammatus" => Some(Self::Mammatus),
            "Manana" => Some(Self::Manana),
            "Manchez" => Some(Self::Manchez),
            "Marquis" => Some(Self::Marquis),
            "Marshall" => Some(Self::Marshall),
            "Massacro" => Some(Self::Massacro),
            "Massacro2" => Some(Self::Massacro2),
            "Maverick" => Some(Self::Maverick),
            "Mesa" => Some(Self::Mesa),
            "Mesa2" => Some(Self::Mesa2),
            "Mesa3" => Some(Self::Mesa3),
            "MetroTrain" => Some(Self::MetroTrain),
            "Miljet" => Some(Self::Miljet),
            "Minivan" => Some(Self::Minivan),
            "Minivan2" => Some(Self::Minivan2),
            "Mixer" => Some(Self::Mixer),
            "Mixer2" => Some(Self::Mixer2),
            "Monroe" => Some(Self::Monroe),
            "Monster" => Some(Self::Monster),
            "Moonbeam" => Some(Self::Moonbeam),
            "Moonbeam2" => Some(Self::Moonbeam2),
            "Mower" => Some(Self::Mower),
            "Mule" => Some(Self::Mule),
            "Mule2" => Some(Self::Mule2),
            "Mule3" => Some(Self::Mule3),
            "Nemesis" => Some(Self::Nemesis),
            "Nero" => Some(Self::Nero),
            "Nero2" => Some(Self::Nero2),
            "Nightblade" => Some(Self::Nightblade),
            "Nightshade" => Some(Self::Nightshade),
            "NightShark" => Some(Self::NightShark),
            "Nimbus" => Some(Self::Nimbus),
            "Ninef" => Some(Self::Ninef),
            "Ninef2" => Some(Self::Ninef2),
            "Omnis" => Some(Self::Omnis),
            "Oppressor" => Some(Self::Oppressor),
            "Oracle" => Some(Self::Oracle),
            "Oracle2" => Some(Self::Oracle2),
            "Osiris" => Some(Self::Osiris),
            "Packer" => Some(Self::Packer),
            "Panto" => Some(Self::Panto),
            "Paradise" => Some(Self::Paradise),
            "Patriot" => Some(Self::Patriot),
            "PBus" => Some(Self::PBus),
            "PCJ" => Some(Self::PCJ),
            "Penetrator" => Some(Self::Penetrator),
            "Penumbra" => Some(Self::Penumbra),
            "Peyote" => Some(Self::Peyote),
            "Pfister811" => Some(Self::Pfister811),
            "Phantom" => Some(Self::Phantom),
            "Phantom2" => Some(Self::Phantom2),
            "Phantom3" => Some(Self::Phantom3),
            "Phoenix" => Some(Self::Phoenix),
            "Picador" => Some(Self::Picador),
            "Pigalle" => Some(Self::Pigalle),
            "Police" => Some(Self::Police),
            "Police2" => Some(Self::Police2),
            "Police3" => Some(Self::Police3),
            "Police4" => Some(Self::Police4),
            "Policeb" => Some(Self::Policeb),
            "PoliceOld1" => Some(Self::PoliceOld1),
            "PoliceOld2" => Some(Self::PoliceOld2),
            "PoliceT" => Some(Self::PoliceT),
            "Polmav" => Some(Self::Polmav),
            "Pony" => Some(Self::Pony),
            "Pony2" => Some(Self::Pony2),
            "Pounder" => Some(Self::Pounder),
            "Prairie" => Some(Self::Prairie),
            "Pranger" => Some(Self::Pranger),
            "Predator" => Some(Self::Predator),
            "Premier" => Some(Self::Premier),
            "Primo" => Some(Self::Primo),
            "Primo2" => Some(Self::Primo2),
            "PropTrailer" => Some(Self::PropTrailer),
            "Prototipo" => Some(Self::Prototipo),
            "Radi" => Some(Self::Radi),
            "RakeTrailer" => Some(Self::RakeTrailer),
            "RancherXL" => Some(Self::RancherXL),
            "RancherXL2" => Some(Self::RancherXL2),
            "RallyTruck" => Some(Self::RallyTruck),
            "RapidGT" => Some(Self::RapidGT),
            "RapidGT2" => Some(Self::RapidGT2),
            "Raptor" => Some(Self::Raptor),
            "RatBike" => Some(Self::RatBike),
            "RatLoader" => Some(Self::RatLoader),
            "RatLoader2" => Some(Self::RatLoader2),
            "Reaper" => Some(Self::Reaper),
            "Rebel" => Some(Self::Rebel),
            "Rebel2" => Some(Self::Rebel2),
            "Regina" => Some(Self::Regina),
            "RentalBus" => Some(Self::RentalBus),
            "Rhapsody" => Some(Self::Rhapsody),
            "Rhino" => Some(Self::Rhino),
            "Riot" => Some(Self::Riot),
            "Ripley" => Some(Self::Ripley),
            "Rocoto" => Some(Self::Rocoto),
            "Romero" => Some(Self::Romero),
            "Rubble" => Some(Self::Rubble),
            "Ruffian" => Some(Self::Ruffian),
            "Ruiner" => Some(Self::Ruiner),
            "Ruiner2" => Some(Self::Ruiner2),
            "Ruiner3" => Some(Self::Ruiner3),
            "Rumpo" => Some(Self::Rumpo),
            "Rumpo2" => Some(Self::Rumpo2),
            "Rumpo3" => Some(Self::Rumpo3),
            "Ruston" => Some(Self::Ruston),
            "SabreGT" => Some(Self::SabreGT),
            "SabreGT2" => Some(Self::SabreGT2),
            "Sadler" => Some(Self::Sadler),
            "Sadler2" => Some(Self::Sadler2),
            "Sanchez" => Some(Self::Sanchez),
            "Sanchez2" => Some(Self::Sanchez2),
            "Sanctus" => Some(Self::Sanctus),
            "Sandking" => Some(Self::Sandking),
            "Sandking2" => Some(Self::Sandking2),
            "Savage" => Some(Self::Savage),
            "Schafter2" => Some(Self::Schafter2),
            "Schafter3" => Some(Self::Schafter3),
            "Schafter4" => Some(Self::Schafter4),
            "Schafter5" => Some(Self::Schafter5),
            "Schafter6" => Some(Self::Schafter6),
            "Schwarzer" => Some(Self::Schwarzer),
            "Scorcher" => Some(Self::Scorcher),
            "Scrap" => Some(Self::Scrap),
            "Seashark" => Some(Self::Seashark),
            "Seashark2" => Some(Self::Seashark2),
            "Seashark3" => Some(Self::Seashark3),
            "Seminole" => Some(Self::Seminole),
            "Sentinel" => Some(Self::Sentinel),
            "Sentinel2" => Some(Self::Sentinel2),
            "Serrano" => Some(Self::Serrano),
            "Seven70" => Some(Self::Seven70),
            "Shamal" => Some(Self::Shamal),
            "Sheava" => Some(Self::Sheava),
            "Sheriff" => Some(Self::Sheriff),
            "Sheriff2" => Some(Self::Sheriff2),
            "Shotaro" => Some(Self::Shotaro),
            "Skylift" => Some(Self::Skylift),
            "SlamVan" => Some(Self::SlamVan),
            "SlamVan2" => Some(Self::SlamVan2),
            "SlamVan3" => Some(Self::SlamVan3),
            "Sovereign" => Some(Self::Sovereign),
            "Specter" => Some(Self::Specter),
            "Specter2" => Some(Self::Specter2),
            "Speeder" => Some(Self::Speeder),
            "Speeder2" => Some(Self::Speeder2),
            "Speedo" => Some(Self::Speedo),
            "Speedo2" => Some(Self::Speedo2),
            "Squalo" => Some(Self::Squalo),
            "Stalion" => Some(Self::Stalion),
            "Stalion2" => Some(Self::Stalion2),
            "Stanier" => Some(Self::Stanier),
            "Stinger" => Some(Self::Stinger),
            "StingerGT" => Some(Self::StingerGT),
            "Stockade" => Some(Self::Stockade),
            "Stockade3" => Some(Self::Stockade3),
            "Stratum" => Some(Self::Stratum),
            "Stretch" => Some(Self::Stretch),
            "Stunt" => Some(Self::Stunt),
            "Submersible" => Some(Self::Submersible),
            "Submersible2" => Some(Self::Submersible2),
            "Sultan" => Some(Self::Sultan),
            "SultanRS" => Some(Self::SultanRS),
            "Suntrap" => Some(Self::Suntrap),
            "Superd" => Some(Self::Superd),
            "Supervolito" => Some(Self::Supervolito),
            "Supervolito2" => Some(Self::Supervolito2),
            "Surano" => Some(Self::Surano),
            "Surfer" => Some(Self::Surfer),
            "Surfer2" => Some(Self::Surfer2),
            "Surge" => Some(Self::Surge),
            "Swift2" => Some(Self::Swift2),
            "Swift" => Some(Self::Swift),
            "T20" => Some(Self::T20),
            "Taco" => Some(Self::Taco),
            "Tailgater" => Some(Self::Tailgater),
            "Tampa" => Some(Self::Tampa),
            "Tampa2" => Some(Self::Tampa2),
            "Tampa3" => Some(Self::Tampa3),
            "Tanker" => Some(Self::Tanker),
            "Tanker2" => Some(Self::Tanker2),
            "TankerCar" => Some(Self::TankerCar),
            "Taxi" => Some(Self::Taxi),
            "Technical" => Some(Self::Technical),
            "Technical2" => Some(Self::Technical2),
            "Technical3" => Some(Self::Technical3),
            "Tempesta" => Some(Self::Tempesta),
            "Thrust" => Some(Self::Thrust),
            "TipTruck" => Some(Self::TipTruck),
            "TipTruck2" => Some(Self::TipTruck2),
            "Titan" => Some(Self::Titan),
            "Torero" => Some(Self::Torero),
            "Tornado" => Some(Self::Tornado),
            "Tornado2" => Some(Self::Tornado2),
            "Tornado3" => Some(Self::Tornado3),
            "Tornado4" => Some(Self::Tornado4),
            "Tornado5" => Some(Self::Tornado5),
            "Tornado6" => Some(Self::Tornado6),
            "Toro" => Some(Self::Toro),
            "Toro2" => Some(Self::Toro2),
            "Tourbus" => Some(Self::Tourbus),
            "TowTruck" => Some(Self::TowTruck),
            "TowTruck2" => Some(Self::TowTruck2),
            "TR2" => Some(Self::TR2),
            "TR3" => Some(Self::TR3),
            "TR4" => Some(Self::TR4),
            "Tractor" => Some(Self::Tractor),
            "Tractor2" => Some(Self::Tractor2),
            "Tractor3" => Some(Self::Tractor3),
            "TrailerLogs" => Some(Self::TrailerLogs),
            "TrailerLarge" => Some(Self::TrailerLarge),
            "Trailers" => Some(Self::Trailers),
            "Trailers2" => Some(Self::Trailers2),
            "Trailers3" => Some(Self::Trailers3),
            "Trailers4" => Some(Self::Trailers4),
            "TrailerSmall" => Some(Self::TrailerSmall),
            "TrailerSmall2" => Some(Self::TrailerSmall2),
            "Trash" => Some(Self::Trash),
            "Trash2" => Some(Self::Trash2),
            "TRFlat" => Some(Self::TRFlat),
            "TriBike" => Some(Self::TriBike),
            "TriBike2" => Some(Self::TriBike2),
            "TriBike3" => Some(Self::TriBike3),
            "TrophyTruck" => Some(Self::TrophyTruck),
            "TrophyTruck2" => Some(Self::TrophyTruck2),
            "Tropic" => Some(Self::Tropic),
            "Tropic2" => Some(Self::Tropic2),
            "Tropos" => Some(Self::Tropos),
            "Tug" => Some(Self::Tug),
            "Turismor" => Some(Self::Turismor),
            "Turismo2" => Some(Self::Turismo2),
            "TVTrailer" => Some(Self::TVTrailer),
            "Tyrus" => Some(Self::Tyrus),
            "UtilliTruck" => Some(Self::UtilliTruck),
            "UtilliTruck2" => Some(Self::UtilliTruck2),
            "UtilliTruck3" => Some(Self::UtilliTruck3),
            "Vacca" => Some(Self::Vacca),
            "Vader" => Some(Self::Vader),
            "Vagner" => Some(Self::Vagner),
            "Valkyrie" => Some(Self::Valkyrie),
            "Valkyrie2" => Some(Self::Valkyrie2),
            "Velum" => Some(Self::Velum),
            "Velum2" => Some(Self::Velum2),
            "Verlierer2" => Some(Self::Verlierer2),
            "Vestra" => Some(Self::Vestra),
            "Vigero" => Some(Self::Vigero),
            "Vindicator" => Some(Self::Vindicator),
            "Virgo" => Some(Self::Virgo),
            "Virgo2" => Some(Self::Virgo2),
            "Virgo3" => Some(Self::Virgo3),
            "Volatus" => Some(Self::Volatus),
            "Voltic" => Some(Self::Voltic),
            "Voltic2" => Some(Self::Voltic2),
            "Voodoo" => Some(Self::Voodoo),
            "Voodoo2" => Some(Self::Voodoo2),
            "Vortex" => Some(Self::Vortex),
            "Warrener" => Some(Self::Warrener),
            "Washington" => Some(Self::Washington),
            "Wastelander" => Some(Self::Wastelander),
            "Windsor" => Some(Self::Windsor),
            "Windsor2" => Some(Self::Windsor2),
            "Wolfsbane" => Some(Self::Wolfsbane),
            "XA21" => Some(Self::XA21),
            "XLS" => Some(Self::XLS),
            "XLS2" => Some(Self::XLS2),
            "Youga" => Some(Self::Youga),
            "Youga2" => Some(Self::Youga2),
            "Zentorno" => Some(Self::Zentorno),
            "Zion" => Some(Self::Zion),
            "Zion2" => Some(Self::Zion2),
            "ZombieA" => Some(Self::ZombieA),
            "ZombieB" => Some(Self::ZombieB),
            "ZType" => Some(Self::ZType),
            // Historical aliases from the UtilityTruck rename.
            "UtilityTruck" => Some(Self::UtilliTruck),
            "UtilityTruck2" => Some(Self::UtilliTruck2),
            "UtilityTruck3" => Some(Self::UtilliTruck3),
            _ => None,
        }
    }

    /// Looks up an identifier by its 32-bit model hash.
    ///
    /// Hash values are unique across the active table, so at most one
    /// identifier matches.
    pub const fn from_hash(hash: u32) -> Option<Self> {
        match hash {
            3078201489 => Some(Self::Adder),
            1283517198 => Some(Self::Airbus),
            1560980623 => Some(Self::Airtug),
            1672195559 => Some(Self::Akuma),
            767087018 => Some(Self::Alpha),
            1171614426 => Some(Self::Ambulance),
            837858166 => Some(Self::Annihilator),
            562680400 => Some(Self::Apc),
            159274291 => Some(Self::Ardent),
            3087536137 => Some(Self::ArmyTanker),
            2818520053 => Some(Self::ArmyTrailer),
            2657817814 => Some(Self::ArmyTrailer2),
            2485144969 => Some(Self::Asea),
            2487343317 => Some(Self::Asea2),
            2391954683 => Some(Self::Asterope),
            2179174271 => Some(Self::Avarus),
            2154536131 => Some(Self::Bagger),
            3895125590 => Some(Self::BaleTrailer),
            3486135912 => Some(Self::Baller),
            142944341 => Some(Self::Baller2),
            1878062887 => Some(Self::Baller3),
            634118882 => Some(Self::Baller4),
            470404958 => Some(Self::Baller5),
            666166960 => Some(Self::Baller6),
            3253274834 => Some(Self::Banshee),
            633712403 => Some(Self::Banshee2),
            3471458123 => Some(Self::Barracks),
            1074326203 => Some(Self::Barracks2),
            630371791 => Some(Self::Barracks3),
            4180675781 => Some(Self::Bati),
            3403504941 => Some(Self::Bati2),
            2053223216 => Some(Self::Benson),
            1824333165 => Some(Self::Besra),
            1274868363 => Some(Self::BestiaGTS),
            86520421 => Some(Self::BF400),
            1126868326 => Some(Self::BfInjection),
            850991848 => Some(Self::Biff),
            3945366167 => Some(Self::Bifta),
            4278019151 => Some(Self::Bison),
            2072156101 => Some(Self::Bison2),
            1739845664 => Some(Self::Bison3),
            850565707 => Some(Self::BJXL),
            3089165662 => Some(Self::Blade),
            2166734073 => Some(Self::Blazer),
            4246935337 => Some(Self::Blazer2),
            3025077634 => Some(Self::Blazer3),
            3854198872 => Some(Self::Blazer4),
            2704629607 => Some(Self::Blazer5),
            4143991942 => Some(Self::Blimp),
            3681241380 => Some(Self::Blimp2),
            3950024287 => Some(Self::Blista),
            1039032026 => Some(Self::Blista2),
            3703315515 => Some(Self::Blista3),
            1131912276 => Some(Self::Bmx),
            524108981 => Some(Self::BoatTrailer),
            1069929536 => Some(Self::BobcatXL),
            2859047862 => Some(Self::Bodhi2),
            2307837162 => Some(Self::Boxville),
            4061868990 => Some(Self::Boxville2),
            121658888 => Some(Self::Boxville3),
            444171386 => Some(Self::Boxville4),
            682434785 => Some(Self::Boxville5),
            2815302597 => Some(Self::Brawler),
            3989239879 => Some(Self::Brickade),
            117401876 => Some(Self::BType),
            3463132580 => Some(Self::BType2),
            3692679425 => Some(Self::BType3),
            3612755468 => Some(Self::Buccaneer),
            3281516360 => Some(Self::Buccaneer2),
            3990165190 => Some(Self::Buffalo),
            736902334 => Some(Self::Buffalo2),
            237764926 => Some(Self::Buffalo3),
            1886712733 => Some(Self::Bulldozer),
            2598821281 => Some(Self::Bullet),
            2948279460 => Some(Self::Burrito),
            3387490166 => Some(Self::Burrito2),
            2551651283 => Some(Self::Burrito3),
            893081117 => Some(Self::Burrito4),
            1132262048 => Some(Self::Burrito5),
            3581397346 => Some(Self::Bus),
            788747387 => Some(Self::Buzzard),
            745926877 => Some(Self::Buzzard2),
            3334677549 => Some(Self::CableCar),
            1147287684 => Some(Self::Caddy),
            3757070668 => Some(Self::Caddy2),
            3525819835 => Some(Self::Caddy3),
            1876516712 => Some(Self::Camper),
            2072687711 => Some(Self::Carbonizzare),
            11251904 => Some(Self::CarbonRS),
            4244420235 => Some(Self::Cargobob),
            1621617168 => Some(Self::Cargobob2),
            1394036463 => Some(Self::Cargobob3),
            2025593404 => Some(Self::Cargobob4),
            368211810 => Some(Self::CargoPlane),
            941800958 => Some(Self::Casco),
            2006918058 => Some(Self::Cavalcade),
            3505073125 => Some(Self::Cavalcade2),
            2983812512 => Some(Self::Cheetah),
            223240013 => Some(Self::Cheetah2),
            6774487 => Some(Self::Chimera),
            349605904 => Some(Self::Chino),
            2933279331 => Some(Self::Chino2),
            390201602 => Some(Self::Cliffhanger),
            2222034228 => Some(Self::Coach),
            906642318 => Some(Self::Cog55),
            704435172 => Some(Self::Cog552),
            330661258 => Some(Self::CogCabrio),
            2264796000 => Some(Self::Cognoscenti),
            3690124666 => Some(Self::Cognoscenti2),
            3249425686 => Some(Self::Comet2),
            2272483501 => Some(Self::Comet3),
            683047626 => Some(Self::Contender),
            108773431 => Some(Self::Coquette),
            1011753235 => Some(Self::Coquette2),
            784565758 => Some(Self::Coquette3),
            448402357 => Some(Self::Cruiser),
            321739290 => Some(Self::Crusader),
            3650256867 => Some(Self::Cuban800),
            3288047904 => Some(Self::Cutter),
            2006142190 => Some(Self::Daemon),
            2890830793 => Some(Self::Daemon2),
            822018448 => Some(Self::Defiler),
            4055125828 => Some(Self::Diablous),
            1790834270 => Some(Self::Diablous2),
            3164157193 => Some(Self::Dilettante),
            1682114128 => Some(Self::Dilettante2),
            1033245328 => Some(Self::Dinghy),
            276773164 => Some(Self::Dinghy2),
            509498602 => Some(Self::Dinghy3),
            867467158 => Some(Self::Dinghy4),
            1770332643 => Some(Self::DLoader),
            2154757102 => Some(Self::DockTrailer),
            3410276810 => Some(Self::Docktug),
            3393804037 => Some(Self::Dodo),
            80636076 => Some(Self::Dominator),
            3379262425 => Some(Self::Dominator2),
            2623969160 => Some(Self::Double),
            1177543287 => Some(Self::Dubsta),
            3900892662 => Some(Self::Dubsta2),
            3057713523 => Some(Self::Dubsta3),
            723973206 => Some(Self::Dukes),
            3968823444 => Some(Self::Dukes2),
            2164484578 => Some(Self::Dump),
            2633113103 => Some(Self::Dune),
            534258863 => Some(Self::Dune2),
            1897744184 => Some(Self::Dune3),
            3467805257 => Some(Self::Dune4),
            3982671785 => Some(Self::Dune5),
            970356638 => Some(Self::Duster),
            196747873 => Some(Self::Elegy),
            3728579874 => Some(Self::Elegy2),
            3609690755 => Some(Self::Emperor),
            2411965148 => Some(Self::Emperor2),
            3053254478 => Some(Self::Emperor3),
            1753414259 => Some(Self::Enduro),
            3003014393 => Some(Self::EntityXF),
            2035069708 => Some(Self::Esskey),
            4289813342 => Some(Self::Exemplar),
            3703357000 => Some(Self::F620),
            2175389151 => Some(Self::Faction),
            2504420315 => Some(Self::Faction2),
            2255212070 => Some(Self::Faction3),
            2452219115 => Some(Self::Faggio),
            55628203 => Some(Self::Faggio2),
            3005788552 => Some(Self::Faggio3),
            1127131465 => Some(Self::FBI),
            2647026068 => Some(Self::FBI2),
            627535535 => Some(Self::FCR),
            3537231886 => Some(Self::FCR2),
            3903372712 => Some(Self::Felon),
            4205676014 => Some(Self::Felon2),
            2299640309 => Some(Self::Feltzer2),
            2728226064 => Some(Self::Feltzer3),
            1938952078 => Some(Self::FireTruck),
            3458454463 => Some(Self::Fixter),
            1353720154 => Some(Self::Flatbed),
            1491375716 => Some(Self::Forklift),
            1426219628 => Some(Self::FMJ),
            3157435195 => Some(Self::FQ2),
            1030400667 => Some(Self::Freight),
            184361638 => Some(Self::FreightCar),
            920453016 => Some(Self::FreightCont1),
            240201337 => Some(Self::FreightCont2),
            642617954 => Some(Self::FreightGrain),
            3517691494 => Some(Self::FreightTrailer),
            744705981 => Some(Self::Frogger),
            1949211328 => Some(Self::Frogger2),
            1909141499 => Some(Self::Fugitive),
            3205927392 => Some(Self::Furoregt),
            499169875 => Some(Self::Fusilade),
            2016857647 => Some(Self::Futo),
            741090084 => Some(Self::Gargoyle),
            2494797253 => Some(Self::Gauntlet),
            349315417 => Some(Self::Gauntlet2),
            2549763894 => Some(Self::GBurrito),
            296357396 => Some(Self::GBurrito2),
            75131841 => Some(Self::Glendale),
            1234311532 => Some(Self::GP1),
            1019737494 => Some(Self::GrainTrailer),
            2519238556 => Some(Self::Granger),
            2751205197 => Some(Self::Gresley),
            2186977100 => Some(Self::Guardian),
            884422927 => Some(Self::Habanero),
            1265391242 => Some(Self::Hakuchou),
            4039289119 => Some(Self::Hakuchou2),
            4262731174 => Some(Self::HalfTrack),
            444583674 => Some(Self::Handler),
            1518533038 => Some(Self::Hauler),
            387748548 => Some(Self::Hauler2),
            301427732 => Some(Self::Hexer),
            37348240 => Some(Self::Hotknife),
            486987393 => Some(Self::Huntley),
            970385471 => Some(Self::Hydra),
            418536135 => Some(Self::Infernus),
            2889029532 => Some(Self::Infernus2),
            3005245074 => Some(Self::Ingot),
            4135840458 => Some(Self::Innovation),
            2434067162 => Some(Self::Insurgent),
            2071877360 => Some(Self::Insurgent2),
            2370534026 => Some(Self::Insurgent3),
            886934177 => Some(Self::Intruder),
            3117103977 => Some(Self::Issi2),
            2246633323 => Some(Self::ItaliGTB),
            3812247419 => Some(Self::ItaliGTB2),
            3670438162 => Some(Self::Jackal),
            1051415893 => Some(Self::JB700),
            2997294755 => Some(Self::Jester),
            3188613414 => Some(Self::Jester2),
            1058115860 => Some(Self::Jet),
            861409633 => Some(Self::Jetmax),
            4174679674 => Some(Self::Journey),
            92612664 => Some(Self::Kalahari),
            544021352 => Some(Self::Khamelion),
            2922118804 => Some(Self::Kuruma),
            410882957 => Some(Self::Kuruma2),
            1269098716 => Some(Self::Landstalker),
            3013282534 => Some(Self::Lazer),
            3062131285 => Some(Self::LE7B),
            640818791 => Some(Self::Lectro),
            469291905 => Some(Self::Lguard),
            4180339789 => Some(Self::Limo2),
            2068293287 => Some(Self::Lurcher),
            621481054 => Some(Self::Luxor),
            3080673438 => Some(Self::Luxor2),
            482197771 => Some(Self::Lynx),
            2634021974 => Some(Self::Mamba),
            2548391185 => Some(Self::Mammatus),
            2170765704 => Some(Self::Manana),
            2771538552 => Some(Self::Manchez),
            3251507587 => Some(Self::Marquis),
            1233534620 => Some(Self::Marshall),
            4152024626 => Some(Self::Massacro),
            3663206819 => Some(Self::Massacro2),
            2634305738 => Some(Self::Maverick),
            914654722 => Some(Self::Mesa),
            3546958660 => Some(Self::Mesa2),
            2230595153 => Some(Self::Mesa3),
            868868440 => Some(Self::MetroTrain),
            165154707 => Some(Self::Miljet),
            3984502180 => Some(Self::Minivan),
            3168702960 => Some(Self::Minivan2),
            3510150843 => Some(Self::Mixer),
            475220373 => Some(Self::Mixer2),
            3861591579 => Some(Self::Monroe),
            3449006043 => Some(Self::Monster),
            525509695 => Some(Self::Moonbeam),
            1896491931 => Some(Self::Moonbeam2),
            1783355638 => Some(Self::Mower),
            904750859 => Some(Self::Mule),
            3244501995 => Some(Self::Mule2),
            2242229361 => Some(Self::Mule3),
            3660088182 => Some(Self::Nemesis),
            1034187331 => Some(Self::Nero),
            1093792632 => Some(Self::Nero2),
            2688780135 => Some(Self::Nightblade),
            2351681756 => Some(Self::Nightshade),
            433954513 => Some(Self::NightShark),
            2999939664 => Some(Self::Nimbus),
            1032823388 => Some(Self::Ninef),
            2833484545 => Some(Self::Ninef2),
            3517794615 => Some(Self::Omnis),
            884483972 => Some(Self::Oppressor),
            1348744438 => Some(Self::Oracle),
            3783366066 => Some(Self::Oracle2),
            1987142870 => Some(Self::Osiris),
            569305213 => Some(Self::Packer),
            3863274624 => Some(Self::Panto),
            1488164764 => Some(Self::Paradise),
            3486509883 => Some(Self::Patriot),
            2287941233 => Some(Self::PBus),
            3385765638 => Some(Self::PCJ),
            2536829930 => Some(Self::Penetrator),
            3917501776 => Some(Self::Penumbra),
            1830407356 => Some(Self::Peyote),
            2465164804 => Some(Self::Pfister811),
            2157618379 => Some(Self::Phantom),
            2645431192 => Some(Self::Phantom2),
            177270108 => Some(Self::Phantom3),
            2199527893 => Some(Self::Phoenix),
            1507916787 => Some(Self::Picador),
            1078682497 => Some(Self::Pigalle),
            2046537925 => Some(Self::Police),
            2667966721 => Some(Self::Police2),
            1912215274 => Some(Self::Police3),
            2321795001 => Some(Self::Police4),
            4260343491 => Some(Self::Policeb),
            2758042359 => Some(Self::PoliceOld1),
            2515846680 => Some(Self::PoliceOld2),
            456714581 => Some(Self::PoliceT),
            353883353 => Some(Self::Polmav),
            4175309224 => Some(Self::Pony),
            943752001 => Some(Self::Pony2),
            2112052861 => Some(Self::Pounder),
            2844316578 => Some(Self::Prairie),
            741586030 => Some(Self::Pranger),
            3806844075 => Some(Self::Predator),
            2411098011 => Some(Self::Premier),
            3144368207 => Some(Self::Primo),
            2254540506 => Some(Self::Primo2),
            356391690 => Some(Self::PropTrailer),
            2123327359 => Some(Self::Prototipo),
            2643899483 => Some(Self::Radi),
            390902130 => Some(Self::RakeTrailer),
            1645267888 => Some(Self::RancherXL),
            1933662059 => Some(Self::RancherXL2),
            2191146052 => Some(Self::RallyTruck),
            2360515092 => Some(Self::RapidGT),
            1737773231 => Some(Self::RapidGT2),
            3620039993 => Some(Self::Raptor),
            1873600305 => Some(Self::RatBike),
            3627815886 => Some(Self::RatLoader),
            3705788919 => Some(Self::RatLoader2),
            234062309 => Some(Self::Reaper),
            3087195462 => Some(Self::Rebel),
            2249373259 => Some(Self::Rebel2),
            4280472072 => Some(Self::Regina),
            3196165219 => Some(Self::RentalBus),
            841808271 => Some(Self::Rhapsody),
            782665360 => Some(Self::Rhino),
            3089277354 => Some(Self::Riot),
            3448987385 => Some(Self::Ripley),
            2136773105 => Some(Self::Rocoto),
            627094268 => Some(Self::Romero),
            2589662668 => Some(Self::Rubble),
            3401388520 => Some(Self::Ruffian),
            4067225593 => Some(Self::Ruiner),
            941494461 => Some(Self::Ruiner2),
            777714999 => Some(Self::Ruiner3),
            1162065741 => Some(Self::Rumpo),
            2518351607 => Some(Self::Rumpo2),
            1475773103 => Some(Self::Rumpo3),
            719660200 => Some(Self::Ruston),
            2609945748 => Some(Self::SabreGT),
            223258115 => Some(Self::SabreGT2),
            3695398481 => Some(Self::Sadler),
            734217681 => Some(Self::Sadler2),
            788045382 => Some(Self::Sanchez),
            2841686334 => Some(Self::Sanchez2),
            1491277511 => Some(Self::Sanctus),
            3105951696 => Some(Self::Sandking),
            989381445 => Some(Self::Sandking2),
            4212341271 => Some(Self::Savage),
            3039514899 => Some(Self::Schafter2),
            2809443750 => Some(Self::Schafter3),
            1489967196 => Some(Self::Schafter4),
            3406724313 => Some(Self::Schafter5),
            1922255844 => Some(Self::Schafter6),
            3548084598 => Some(Self::Schwarzer),
            4108429845 => Some(Self::Scorcher),
            2594165727 => Some(Self::Scrap),
            3264692260 => Some(Self::Seashark),
            3678636260 => Some(Self::Seashark2),
            3983945033 => Some(Self::Seashark3),
            1221512915 => Some(Self::Seminole),
            1349725314 => Some(Self::Sentinel),
            873639469 => Some(Self::Sentinel2),
            1337041428 => Some(Self::Serrano),
            2537130571 => Some(Self::Seven70),
            3080461301 => Some(Self::Shamal),
            819197656 => Some(Self::Sheava),
            2611638396 => Some(Self::Sheriff),
            1922257928 => Some(Self::Sheriff2),
            3889340782 => Some(Self::Shotaro),
            1044954915 => Some(Self::Skylift),
            729783779 => Some(Self::SlamVan),
            833469436 => Some(Self::SlamVan2),
            1119641113 => Some(Self::SlamVan3),
            743478836 => Some(Self::Sovereign),
            1886268224 => Some(Self::Specter),
            1074745671 => Some(Self::Specter2),
            231083307 => Some(Self::Speeder),
            437538602 => Some(Self::Speeder2),
            3484649228 => Some(Self::Speedo),
            728614474 => Some(Self::Speedo2),
            400514754 => Some(Self::Squalo),
            1923400478 => Some(Self::Stalion),
            3893323758 => Some(Self::Stalion2),
            2817386317 => Some(Self::Stanier),
            1545842587 => Some(Self::Stinger),
            2196019706 => Some(Self::StingerGT),
            1747439474 => Some(Self::Stockade),
            4080511798 => Some(Self::Stockade3),
            1723137093 => Some(Self::Stratum),
            2333339779 => Some(Self::Stretch),
            2172210288 => Some(Self::Stunt),
            771711535 => Some(Self::Submersible),
            3228633070 => Some(Self::Submersible2),
            970598228 => Some(Self::Sultan),
            3999278268 => Some(Self::SultanRS),
            4012021193 => Some(Self::Suntrap),
            1123216662 => Some(Self::Superd),
            710198397 => Some(Self::Supervolito),
            2623428164 => Some(Self::Supervolito2),
            384071873 => Some(Self::Surano),
            699456151 => Some(Self::Surfer),
            2983726598 => Some(Self::Surfer2),
            2400073108 => Some(Self::Surge),
            1075432268 => Some(Self::Swift2),
            3955379698 => Some(Self::Swift),
            1663218586 => Some(Self::T20),
            1951180813 => Some(Self::Taco),
            3286105550 => Some(Self::Tailgater),
            972671128 => Some(Self::Tampa),
            3223586949 => Some(Self::Tampa2),
            3084515313 => Some(Self::Tampa3),
            3564062519 => Some(Self::Tanker),
            1956216962 => Some(Self::Tanker2),
            586013744 => Some(Self::TankerCar),
            3338918751 => Some(Self::Taxi),
            2198148358 => Some(Self::Technical),
            1180875963 => Some(Self::Technical2),
            1356124575 => Some(Self::Technical3),
            272929391 => Some(Self::Tempesta),
            1836027715 => Some(Self::Thrust),
            48339065 => Some(Self::TipTruck),
            3347205726 => Some(Self::TipTruck2),
            1981688531 => Some(Self::Titan),
            1504306544 => Some(Self::Torero),
            464687292 => Some(Self::Tornado),
            1531094468 => Some(Self::Tornado2),
            1762279763 => Some(Self::Tornado3),
            2261744861 => Some(Self::Tornado4),
            2497353967 => Some(Self::Tornado5),
            2736567667 => Some(Self::Tornado6),
            1070967343 => Some(Self::Toro),
            908897389 => Some(Self::Toro2),
            1941029835 => Some(Self::Tourbus),
            2971866336 => Some(Self::TowTruck),
            3852654278 => Some(Self::TowTruck2),
            2078290630 => Some(Self::TR2),
            1784254509 => Some(Self::TR3),
            2091594960 => Some(Self::TR4),
            1641462412 => Some(Self::Tractor),
            2218488798 => Some(Self::Tractor2),
            1445631933 => Some(Self::Tractor3),
            2016027501 => Some(Self::TrailerLogs),
            1502869817 => Some(Self::TrailerLarge),
            3417488910 => Some(Self::Trailers),
            2715434129 => Some(Self::Trailers2),
            2236089197 => Some(Self::Trailers3),
            3194418602 => Some(Self::Trailers4),
            712162987 => Some(Self::TrailerSmall),
            2413121211 => Some(Self::TrailerSmall2),
            1917016601 => Some(Self::Trash),
            3039269212 => Some(Self::Trash2),
            2942498482 => Some(Self::TRFlat),
            1127861609 => Some(Self::TriBike),
            3061159916 => Some(Self::TriBike2),
            3894672200 => Some(Self::TriBike3),
            101905590 => Some(Self::TrophyTruck),
            3631668194 => Some(Self::TrophyTruck2),
            290013743 => Some(Self::Tropic),
            1448677353 => Some(Self::Tropic2),
            1887331236 => Some(Self::Tropos),
            2194326579 => Some(Self::Tug),
            408192225 => Some(Self::Turismor),
            3312836369 => Some(Self::Turismo2),
            2524324030 => Some(Self::TVTrailer),
            2067820283 => Some(Self::Tyrus),
            516990260 => Some(Self::UtilliTruck),
            887537515 => Some(Self::UtilliTruck2),
            2132890591 => Some(Self::UtilliTruck3),
            338562499 => Some(Self::Vacca),
            4154065143 => Some(Self::Vader),
            1939284556 => Some(Self::Vagner),
            2694714877 => Some(Self::Valkyrie),
            1543134283 => Some(Self::Valkyrie2),
            2621610858 => Some(Self::Velum),
            1077420264 => Some(Self::Velum2),
            1102544804 => Some(Self::Verlierer2),
            1341619767 => Some(Self::Vestra),
            3469130167 => Some(Self::Vigero),
            2941886209 => Some(Self::Vindicator),
            3796912450 => Some(Self::Virgo),
            3395457658 => Some(Self::Virgo2),
            16646064 => Some(Self::Virgo3),
            2449479409 => Some(Self::Volatus),
            2672523198 => Some(Self::Voltic),
            989294410 => Some(Self::Voltic2),
            2006667053 => Some(Self::Voodoo),
            523724515 => Some(Self::Voodoo2),
            3685342204 => Some(Self::Vortex),
            1373123368 => Some(Self::Warrener),
            1777363799 => Some(Self::Washington),
            2382949506 => Some(Self::Wastelander),
            1581459400 => Some(Self::Windsor),
            2364918497 => Some(Self::Windsor2),
            3676349299 => Some(Self::Wolfsbane),
            917809321 => Some(Self::XA21),
            1203490606 => Some(Self::XLS),
            3862958888 => Some(Self::XLS2),
            65402552 => Some(Self::Youga),
            1026149675 => Some(Self::Youga2),
            2891838741 => Some(Self::Zentorno),
            3172678083 => Some(Self::Zion),
            3101863448 => Some(Self::Zion2),
            3285698347 => Some(Self::ZombieA),
            3724934023 => Some(Self::ZombieB),
            758895617 => Some(Self::ZType),
            _ => None,
        }
    }
}

impl fmt::Display for VehicleHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleHash {
    type Err = VehicleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| VehicleError::UnknownModel(s.to_string()))
    }
}

impl TryFrom<u32> for VehicleHash {
    type Error = VehicleError;

    fn try_from(hash: u32) -> Result<Self> {
        Self::from_hash(hash).ok_or(VehicleError::UnknownHash(hash))
    }
}

impl From<VehicleHash> for u32 {
    fn from(vehicle: VehicleHash) -> Self {
        vehicle.hash()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!(VehicleHash::from_name("Adder"), Some(VehicleHash::Adder));
        assert_eq!(VehicleHash::Adder.hash(), 3_078_201_489);
        assert_eq!(VehicleHash::from_name("ZType").map(VehicleHash::hash), Some(758_895_617));
        assert_eq!(
            VehicleHash::from_name("NightShark").map(VehicleHash::hash),
            Some(433_954_513)
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(VehicleHash::from_name("adder"), Some(VehicleHash::Adder));
        assert_eq!(VehicleHash::from_name("ADDER"), Some(VehicleHash::Adder));
        assert_eq!(VehicleHash::from_name("nightshark"), Some(VehicleHash::NightShark));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(VehicleHash::from_name("DoesNotExist"), None);
        let err = "DoesNotExist".parse::<VehicleHash>().unwrap_err();
        assert!(matches!(err, VehicleError::UnknownModel(ref name) if name == "DoesNotExist"));
    }

    #[test]
    fn utility_truck_rename_keeps_hashes() {
        assert_eq!(VehicleHash::UtilliTruck.hash(), 516_990_260);
        assert_eq!(VehicleHash::UtilliTruck2.hash(), 887_537_515);
        assert_eq!(VehicleHash::UtilliTruck3.hash(), 2_132_890_591);

        // The retired names still resolve to the renamed identifiers.
        assert_eq!(
            VehicleHash::from_name("UtilityTruck"),
            Some(VehicleHash::UtilliTruck)
        );
        assert_eq!(
            VehicleHash::from_name("UtilityTruck2"),
            Some(VehicleHash::UtilliTruck2)
        );
        assert_eq!(
            VehicleHash::from_name("UtilityTruck3"),
            Some(VehicleHash::UtilliTruck3)
        );
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(VehicleHash::from_hash(3_078_201_489), Some(VehicleHash::Adder));
        assert_eq!(
            VehicleHash::try_from(758_895_617u32).ok(),
            Some(VehicleHash::ZType)
        );
        let err = VehicleHash::try_from(1u32).unwrap_err();
        assert!(matches!(err, VehicleError::UnknownHash(1)));
    }

    #[test]
    fn display_prints_symbolic_name() {
        assert_eq!(VehicleHash::Adder.to_string(), "Adder");
        assert_eq!(VehicleHash::BF400.to_string(), "BF400");
    }
}
